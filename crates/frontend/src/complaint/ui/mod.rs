use contracts::domain::complaint::{ComplaintRecord, Field};
use contracts::enums::complaint_subject::ComplaintSubject;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::ApiClient;
use super::status::SubmitStatus;
use super::submit::submit_complaint;

const FIELD_LABEL_CLASS: &str = "mb-1 block text-sm font-semibold text-slate-700";
const FIELD_INPUT_CLASS: &str = "block w-full rounded-xl border border-slate-200 bg-white px-4 py-2.5 text-sm text-slate-700 shadow-sm outline-none transition placeholder:text-slate-400 focus:border-blue-700 focus:ring-4 focus:ring-blue-100";
const CARD_CLASS: &str = "form-shell rounded-3xl border border-white/70 bg-white/95 p-6 shadow-2xl shadow-slate-300/50 backdrop-blur transition md:p-8";

#[component]
pub fn ComplaintFormPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");

    let (subject, set_subject) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (complaint, set_complaint) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let subject_ref = NodeRef::<html::Select>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let phone_ref = NodeRef::<html::Input>::new();
    let complaint_ref = NodeRef::<html::Textarea>::new();
    let files_ref = NodeRef::<html::Input>::new();

    // Move focus back to the input a validation error points at
    let focus_field = move |field: Field| {
        let focused = match field {
            Field::Subject => subject_ref.get().map(|el| el.focus()),
            Field::Name => name_ref.get().map(|el| el.focus()),
            Field::Email => email_ref.get().map(|el| el.focus()),
            Field::Phone => phone_ref.get().map(|el| el.focus()),
            Field::Complaint => complaint_ref.get().map(|el| el.focus()),
        };
        if focused.is_none() {
            log::debug!("focus target not mounted");
        }
    };

    let reset_form = move || {
        set_subject.set(String::new());
        set_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_complaint.set(String::new());
        if let Some(input) = files_ref.get() {
            input.set_value("");
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // One submission in flight at a time; the button is disabled while
        // busy, but a queued Enter keypress can still land here.
        if status.get_untracked().is_busy() {
            return;
        }

        let user_agent = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();

        let record = ComplaintRecord::from_form(
            &subject.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
            &phone.get_untracked(),
            &complaint.get_untracked(),
            &user_agent,
        );

        let files: Vec<web_sys::File> = files_ref
            .get_untracked()
            .and_then(|input| input.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        set_status.set(SubmitStatus::Loading);

        let api = api.clone();
        spawn_local(async move {
            match submit_complaint(&api, record, files).await {
                Ok(envelope) => {
                    let message = envelope.message.unwrap_or_else(|| "ส่งสำเร็จ".to_string());
                    set_status.set(SubmitStatus::Success(message));
                    reset_form();
                }
                Err(error) => {
                    log::debug!("submission failed: {}", error);
                    set_status.set(SubmitStatus::from_error(&error));
                    if let Some(field) = error.focus_field() {
                        focus_field(field);
                    }
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-slate-100 text-slate-800 [font-family:'Sarabun',sans-serif]">
            <div class="relative isolate min-h-screen w-full overflow-hidden px-4 py-10">
                <main class="relative mx-auto w-full max-w-2xl">
                    <section
                        id="formCard"
                        class=move || {
                            if status.get().is_busy() {
                                format!("{} opacity-70 pointer-events-none", CARD_CLASS)
                            } else {
                                CARD_CLASS.to_string()
                            }
                        }
                    >
                        <div class="mb-8 text-center">
                            <p class="text-m font-medium text-slate-500">
                                "วิทยาลัยเกษตรและเทคโนโลยีร้อยเอ็ด"
                            </p>
                            <p class="text-sm font-medium text-slate-500">
                                "Roi-et College of Agriculture and Technology"
                            </p>
                            <h2 class="mt-2 text-2xl font-bold tracking-tight text-slate-900">
                                "แบบฟอร์มแจ้งเรื่องร้องเรียน"
                            </h2>
                            <p class="mt-1 text-sm text-slate-500">
                                "กรอกข้อมูลให้ครบถ้วน ระบบจะส่งเรื่องให้ผู้ดูแลทันที"
                            </p>
                        </div>

                        <form class="space-y-4" on:submit=on_submit>
                            <div>
                                <label for="subject" class=FIELD_LABEL_CLASS>
                                    "หัวข้อร้องเรียน"
                                </label>
                                <select
                                    node_ref=subject_ref
                                    id="subject"
                                    required
                                    class=FIELD_INPUT_CLASS
                                    prop:value=move || subject.get()
                                    on:change=move |ev| set_subject.set(event_target_value(&ev))
                                >
                                    <option value="">"-- เลือกหัวข้อที่ร้องเรียน --"</option>
                                    {ComplaintSubject::all()
                                        .into_iter()
                                        .map(|category| {
                                            let label = category.display_name();
                                            view! { <option value=label>{label}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label for="name" class=FIELD_LABEL_CLASS>
                                    "ชื่อ-นามสกุล"
                                </label>
                                <input
                                    node_ref=name_ref
                                    id="name"
                                    type="text"
                                    placeholder="เช่น สมชาย ใจดี"
                                    required
                                    class=FIELD_INPUT_CLASS
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="grid gap-4 md:grid-cols-2">
                                <div>
                                    <label for="email" class=FIELD_LABEL_CLASS>
                                        "อีเมล (ถ้ามี)"
                                    </label>
                                    <input
                                        node_ref=email_ref
                                        id="email"
                                        type="email"
                                        placeholder="name@example.com"
                                        class=FIELD_INPUT_CLASS
                                        prop:value=move || email.get()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label for="phone" class=FIELD_LABEL_CLASS>
                                        "เบอร์โทร"
                                    </label>
                                    <input
                                        node_ref=phone_ref
                                        id="phone"
                                        type="tel"
                                        placeholder="08xxxxxxxx"
                                        required
                                        class=FIELD_INPUT_CLASS
                                        prop:value=move || phone.get()
                                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <div>
                                <label for="complaint" class=FIELD_LABEL_CLASS>
                                    "รายละเอียดเรื่องร้องเรียน"
                                </label>
                                <textarea
                                    node_ref=complaint_ref
                                    id="complaint"
                                    rows="4"
                                    placeholder="ระบุเหตุการณ์ สถานที่ และรายละเอียดที่เกี่ยวข้อง"
                                    required
                                    class=FIELD_INPUT_CLASS
                                    prop:value=move || complaint.get()
                                    on:input=move |ev| set_complaint.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <div>
                                <label for="files" class=FIELD_LABEL_CLASS>
                                    "แนบไฟล์ (ภาพ/PDF)"
                                </label>
                                <input
                                    node_ref=files_ref
                                    id="files"
                                    type="file"
                                    multiple=true
                                    accept="image/*,.pdf"
                                    class="block w-full cursor-pointer rounded-xl border border-dashed border-slate-300 bg-slate-50 px-3 py-2 text-sm text-slate-600 file:mr-4 file:cursor-pointer file:rounded-lg file:border-0 file:bg-blue-100 file:px-3 file:py-2 file:text-sm file:font-semibold file:text-blue-700 hover:border-blue-300"
                                />
                                <p class="mt-1 text-xs text-slate-500">
                                    "แนบได้สูงสุด 3 ไฟล์ ขนาดรวมไม่เกิน 5MB"
                                </p>
                            </div>

                            <button
                                id="submitBtn"
                                type="submit"
                                disabled=move || status.get().is_busy()
                                class="inline-flex w-full items-center justify-center rounded-xl bg-blue-700 px-4 py-3 text-sm font-semibold text-white shadow-lg shadow-blue-300/40 transition hover:bg-blue-800 disabled:cursor-not-allowed disabled:bg-slate-400 disabled:shadow-none"
                            >
                                {move || {
                                    if status.get().is_busy() {
                                        "กำลังส่ง..."
                                    } else {
                                        "ส่งเรื่องร้องเรียน"
                                    }
                                }}
                            </button>
                        </form>

                        <div id="status" class=move || status.get().css_class()>
                            {move || status.get().message().to_string()}
                        </div>
                    </section>
                </main>
            </div>
        </div>
    }
}
