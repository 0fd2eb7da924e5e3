pub mod attachments;
pub mod envelope;
pub mod error;
pub mod record;
pub mod validate;

pub use attachments::{
    AttachmentLedger, FileAttachment, MAX_FILES, MAX_FILE_BYTES, MAX_TOTAL_BYTES,
};
pub use envelope::{parse_envelope, ApiEnvelope};
pub use error::SubmitError;
pub use record::{sanitize, ComplaintRecord};
pub use validate::{validate, Field, ValidationIssue};
