use contracts::domain::complaint::SubmitError;

/// The four states the status line can be in.
///
/// `Idle` is both the initial state and the empty resting state; a submit
/// moves through `Loading` to either `Success` or `Error`, and the next
/// submit starts the cycle over.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    /// Build the error state from a failed submission
    pub fn from_error(error: &SubmitError) -> Self {
        SubmitStatus::Error(error.to_string())
    }

    /// Text for the status line; empty while idle
    pub fn message(&self) -> &str {
        match self {
            SubmitStatus::Idle => "",
            SubmitStatus::Loading => "กำลังส่งข้อมูล...",
            SubmitStatus::Success(message) | SubmitStatus::Error(message) => message,
        }
    }

    /// Status-line classes per state (neutral / green / red)
    pub fn css_class(&self) -> &'static str {
        match self {
            SubmitStatus::Idle | SubmitStatus::Loading => {
                "mt-5 min-h-6 text-center text-sm font-semibold text-slate-600"
            }
            SubmitStatus::Success(_) => {
                "mt-5 min-h-6 text-center text-sm font-semibold text-emerald-600"
            }
            SubmitStatus::Error(_) => {
                "mt-5 min-h-6 text-center text-sm font-semibold text-rose-600"
            }
        }
    }

    /// A submission is in flight; the form must not accept another
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitStatus::Loading)
    }
}
