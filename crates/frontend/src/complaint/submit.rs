use contracts::domain::complaint::{validate, ApiEnvelope, ComplaintRecord, SubmitError};

use super::api::ApiClient;
use super::files::collect_attachments;

/// The whole submission flow for one attempt: validate the sanitized
/// record, read the picked files into attachments, then POST.
///
/// Fails at the first broken step; a record that fails validation never
/// triggers a file read, and a failed file read never reaches the
/// network.
pub async fn submit_complaint(
    api: &ApiClient,
    mut record: ComplaintRecord,
    files: Vec<web_sys::File>,
) -> Result<ApiEnvelope, SubmitError> {
    if let Some(issue) = validate(&record) {
        return Err(SubmitError::Validation(issue));
    }

    record.files = collect_attachments(files).await?;

    api.submit(&record).await
}
