use serde::{Deserialize, Serialize};

use super::error::SubmitError;

/// Fallback shown when the server gives no message of its own
pub const GENERIC_FAILURE: &str = "ระบบขัดข้อง";

/// How many characters of a malformed response body make it into the
/// diagnostic message
const SNIPPET_CHARS: usize = 120;

/// Top-level JSON shape the intake endpoint answers with.
///
/// Both fields default when absent: a JSON body without `ok` reads as a
/// falsy envelope rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Interpret a raw response body.
///
/// Non-JSON (or wrongly-typed) bodies become a network error carrying a
/// truncated snippet of what the server actually sent; well-formed
/// envelopes with `ok: false` surface the server's message.
pub fn parse_envelope(body: &str) -> Result<ApiEnvelope, SubmitError> {
    let envelope: ApiEnvelope = serde_json::from_str(body).map_err(|_| {
        SubmitError::Network(format!("Unexpected API response: {}", snippet(body)))
    })?;

    if !envelope.ok {
        return Err(SubmitError::Application(
            envelope
                .message
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        ));
    }

    Ok(envelope)
}

/// First `SNIPPET_CHARS` characters of the body, char-boundary safe
fn snippet(body: &str) -> &str {
    match body.char_indices().nth(SNIPPET_CHARS) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
