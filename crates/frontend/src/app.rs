use leptos::prelude::*;

use crate::complaint::api::ApiClient;
use crate::complaint::ui::ComplaintFormPage;
use crate::shared::config;

#[component]
pub fn App() -> impl IntoView {
    // The endpoint is resolved exactly once, here; everything downstream
    // receives it through the client.
    let endpoint = config::resolve_api_url();
    if endpoint.is_none() {
        log::warn!("no API endpoint configured; submissions will fail");
    }
    provide_context(ApiClient::new(endpoint));

    view! { <ComplaintFormPage /> }
}
