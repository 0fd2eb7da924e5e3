use contracts::domain::complaint::{parse_envelope, ApiEnvelope, ComplaintRecord, SubmitError};
use gloo_net::http::Request;

/// Client for the complaint intake endpoint.
///
/// The endpoint is resolved once at startup and injected here; nothing
/// re-reads configuration per call. A missing endpoint fails before any
/// network activity.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: Option<String>,
}

impl ApiClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// POST the record as JSON and interpret the response envelope.
    ///
    /// The body is declared as plain text even though it carries JSON;
    /// the deployed endpoint only accepts it that way, so the header
    /// stays as-is.
    pub async fn submit(&self, record: &ComplaintRecord) -> Result<ApiEnvelope, SubmitError> {
        let endpoint = self.endpoint.as_deref().ok_or(SubmitError::MissingEndpoint)?;

        let body = serde_json::to_string(record)
            .map_err(|e| SubmitError::Network(format!("Failed to serialize request: {}", e)))?;

        log::debug!("submitting complaint to {}", endpoint);

        let response = Request::post(endpoint)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)
            .map_err(|e| SubmitError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(format!("Failed to send request: {}", e)))?;

        let text = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(format!("Failed to read response: {}", e)))?;

        parse_envelope(&text)
    }
}
