use thiserror::Error;

use super::validate::{Field, ValidationIssue};

/// Why a submission attempt was rejected or failed.
///
/// Every failure in the flow funnels into one of these variants; the UI
/// renders `Display` as the status line and uses [`SubmitError::focus_field`]
/// to move focus back to the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// A form field failed a validation rule
    #[error("{}", .0.message)]
    Validation(ValidationIssue),

    /// Too many files, a file over the per-file cap, or the aggregate cap hit
    #[error("{0}")]
    FileConstraint(String),

    /// The browser failed to read a picked file
    #[error("อ่านไฟล์ {0} ไม่สำเร็จ")]
    FileRead(String),

    /// No API endpoint configured; checked before any network activity
    #[error("Missing API_URL in config.js")]
    MissingEndpoint,

    /// The request failed outright or the response body was not a valid envelope
    #[error("{0}")]
    Network(String),

    /// The server answered with a well-formed envelope whose `ok` was false
    #[error("{0}")]
    Application(String),
}

impl SubmitError {
    /// The input that should regain focus, when the error names one
    pub fn focus_field(&self) -> Option<Field> {
        match self {
            SubmitError::Validation(issue) => Some(issue.field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_and_field() {
        let err = SubmitError::Validation(ValidationIssue {
            message: "กรุณาเลือกหัวข้อ".to_string(),
            field: Field::Subject,
        });
        assert_eq!(err.to_string(), "กรุณาเลือกหัวข้อ");
        assert_eq!(err.focus_field(), Some(Field::Subject));
    }

    #[test]
    fn test_non_validation_errors_have_no_focus_field() {
        assert_eq!(SubmitError::MissingEndpoint.focus_field(), None);
        assert_eq!(
            SubmitError::Application("ระบบขัดข้อง".to_string()).focus_field(),
            None
        );
    }

    #[test]
    fn test_file_read_names_the_file() {
        let err = SubmitError::FileRead("photo.jpg".to_string());
        assert_eq!(err.to_string(), "อ่านไฟล์ photo.jpg ไม่สำเร็จ");
    }
}
