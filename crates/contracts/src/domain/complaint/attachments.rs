use serde::{Deserialize, Serialize};

use super::error::SubmitError;

/// Most files a single submission may attach
pub const MAX_FILES: usize = 3;
/// Per-file cap: 1.5 MiB
pub const MAX_FILE_BYTES: u64 = 3 * 1024 * 1024 / 2;
/// Aggregate cap across all attached files: 5 MiB
pub const MAX_TOTAL_BYTES: u64 = 5 * 1024 * 1024;

/// One picked file, fully read and base64-encoded.
/// Wire shape: `{fileName, data, mimeType}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub file_name: String,
    pub data: String,
    pub mime_type: String,
}

/// Running size bookkeeping for the picked files.
///
/// Kept separate from the actual reads so the limit logic stays testable
/// off-browser. Callers account each file with [`AttachmentLedger::add`]
/// *before* reading it; a file that fails a cap is never read.
#[derive(Debug, Default)]
pub struct AttachmentLedger {
    total: u64,
}

impl AttachmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject an over-long selection up front, before any file is read
    pub fn check_count(count: usize) -> Result<(), SubmitError> {
        if count > MAX_FILES {
            return Err(SubmitError::FileConstraint(format!(
                "แนบได้ไม่เกิน {} ไฟล์",
                MAX_FILES
            )));
        }
        Ok(())
    }

    /// Account one file, in selection order.
    ///
    /// The size joins the running total first; then the per-file cap is
    /// checked, then the aggregate cap. The order is observable: a file
    /// over both caps reports the per-file message.
    pub fn add(&mut self, file_name: &str, size: u64) -> Result<(), SubmitError> {
        self.total += size;

        if size > MAX_FILE_BYTES {
            return Err(SubmitError::FileConstraint(format!(
                "ไฟล์ {} ใหญ่เกินกำหนด",
                file_name
            )));
        }

        if self.total > MAX_TOTAL_BYTES {
            return Err(SubmitError::FileConstraint(
                "ขนาดไฟล์รวมเกิน 5MB".to_string(),
            ));
        }

        Ok(())
    }

    /// Bytes accounted so far
    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_limits() {
        assert_eq!(MAX_FILES, 3);
        assert_eq!(MAX_FILE_BYTES, 1_572_864);
        assert_eq!(MAX_TOTAL_BYTES, 5_242_880);
    }

    #[test]
    fn test_count_checked_before_any_read() {
        let err = AttachmentLedger::check_count(4).unwrap_err();
        assert_eq!(
            err,
            SubmitError::FileConstraint("แนบได้ไม่เกิน 3 ไฟล์".to_string())
        );
        assert!(AttachmentLedger::check_count(3).is_ok());
        assert!(AttachmentLedger::check_count(0).is_ok());
    }

    #[test]
    fn test_files_under_both_caps_pass() {
        let mut ledger = AttachmentLedger::new();
        ledger.add("a.jpg", MIB).unwrap();
        ledger.add("b.jpg", MIB).unwrap();
        ledger.add("c.pdf", MIB).unwrap();
        assert_eq!(ledger.total(), 3 * MIB);
    }

    #[test]
    fn test_per_file_cap_wins_over_aggregate() {
        // Second file exceeds both the per-file cap and, together with the
        // first, the aggregate cap; the per-file message must be reported.
        let mut ledger = AttachmentLedger::new();
        ledger.add("a.jpg", MIB).unwrap();
        let err = ledger.add("b.mov", 4 * MIB + 200 * 1024).unwrap_err();
        assert_eq!(
            err,
            SubmitError::FileConstraint("ไฟล์ b.mov ใหญ่เกินกำหนด".to_string())
        );
    }

    #[test]
    fn test_oversized_third_file_reports_per_file_not_aggregate() {
        // 1 + 1 + 3.5 MiB: the total would breach the aggregate cap, but
        // the 3.5 MiB file breaches the per-file cap, which is checked first.
        let mut ledger = AttachmentLedger::new();
        ledger.add("a.jpg", MIB).unwrap();
        ledger.add("b.jpg", MIB).unwrap();
        let err = ledger.add("c.mp4", 3 * MIB + MIB / 2).unwrap_err();
        assert_eq!(
            err,
            SubmitError::FileConstraint("ไฟล์ c.mp4 ใหญ่เกินกำหนด".to_string())
        );
    }

    #[test]
    fn test_aggregate_cap_fires_once_total_exceeded() {
        // The ledger itself only tracks sizes; the count limit lives in
        // check_count. Four cap-sized files push the total past 5 MiB.
        let mut ledger = AttachmentLedger::new();
        ledger.add("a.bin", MAX_FILE_BYTES).unwrap();
        ledger.add("b.bin", MAX_FILE_BYTES).unwrap();
        ledger.add("c.bin", MAX_FILE_BYTES).unwrap();
        let err = ledger.add("d.bin", MAX_FILE_BYTES).unwrap_err();
        assert_eq!(
            err,
            SubmitError::FileConstraint("ขนาดไฟล์รวมเกิน 5MB".to_string())
        );
    }

    #[test]
    fn test_exactly_at_caps_passes() {
        let mut ledger = AttachmentLedger::new();
        ledger.add("a.bin", MAX_FILE_BYTES).unwrap();
        ledger.add("b.bin", MAX_FILE_BYTES).unwrap();
        ledger.add("c.bin", MAX_FILE_BYTES).unwrap();
        assert!(ledger.total() <= MAX_TOTAL_BYTES);
    }
}
