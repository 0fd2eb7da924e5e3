use serde::{Deserialize, Serialize};

use super::attachments::FileAttachment;

/// Payload POSTed to the intake endpoint.
///
/// Wire names match what the deployed endpoint already expects:
/// `user_agent` goes out abbreviated as `ua`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub subject: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub complaint: String,
    #[serde(rename = "ua")]
    pub user_agent: String,
    pub files: Vec<FileAttachment>,
}

impl ComplaintRecord {
    /// Build a record from raw form values. Text fields are trimmed here
    /// so the validator only ever sees sanitized input. Attachments are
    /// filled in later, after the files have been read.
    pub fn from_form(
        subject: &str,
        name: &str,
        email: &str,
        phone: &str,
        complaint: &str,
        user_agent: &str,
    ) -> Self {
        Self {
            subject: sanitize(subject),
            name: sanitize(name),
            email: sanitize(email),
            phone: sanitize(phone),
            complaint: sanitize(complaint),
            user_agent: user_agent.to_string(),
            files: Vec::new(),
        }
    }
}

/// Trim surrounding whitespace from a form value
pub fn sanitize(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_trims_fields() {
        let record = ComplaintRecord::from_form(
            "  ระบบไอที ",
            " สมชาย ใจดี ",
            "",
            " 081-234-5678 ",
            "  อินเทอร์เน็ตใช้งานไม่ได้  ",
            "Mozilla/5.0",
        );
        assert_eq!(record.subject, "ระบบไอที");
        assert_eq!(record.name, "สมชาย ใจดี");
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "081-234-5678");
        assert_eq!(record.complaint, "อินเทอร์เน็ตใช้งานไม่ได้");
        assert!(record.files.is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let mut record = ComplaintRecord::from_form(
            "ระบบไอที",
            "สมชาย ใจดี",
            "somchai@example.com",
            "0812345678",
            "อินเทอร์เน็ตใช้งานไม่ได้",
            "Mozilla/5.0",
        );
        record.files.push(FileAttachment {
            file_name: "photo.jpg".to_string(),
            data: "aGVsbG8=".to_string(),
            mime_type: "image/jpeg".to_string(),
        });

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ua"], "Mozilla/5.0");
        assert!(json.get("user_agent").is_none());
        assert_eq!(json["files"][0]["fileName"], "photo.jpg");
        assert_eq!(json["files"][0]["mimeType"], "image/jpeg");
        assert_eq!(json["files"][0]["data"], "aGVsbG8=");
    }
}
