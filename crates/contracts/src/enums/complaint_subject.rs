use serde::{Deserialize, Serialize};

/// Complaint categories offered in the subject dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintSubject {
    Teaching,
    Staff,
    Facilities,
    ItSystems,
    FinanceSupplies,
    Other,
}

impl ComplaintSubject {
    /// Thai label shown in the dropdown; this exact string is what goes
    /// out on the wire as the record's `subject`.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplaintSubject::Teaching => "การเรียนการสอน",
            ComplaintSubject::Staff => "ครู/บุคลากร",
            ComplaintSubject::Facilities => "อาคารสถานที่",
            ComplaintSubject::ItSystems => "ระบบไอที",
            ComplaintSubject::FinanceSupplies => "การเงิน/พัสดุ",
            ComplaintSubject::Other => "อื่น ๆ",
        }
    }

    /// All categories, in dropdown order
    pub fn all() -> Vec<ComplaintSubject> {
        vec![
            ComplaintSubject::Teaching,
            ComplaintSubject::Staff,
            ComplaintSubject::Facilities,
            ComplaintSubject::ItSystems,
            ComplaintSubject::FinanceSupplies,
            ComplaintSubject::Other,
        ]
    }

    /// Map a submitted label back to its category
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|subject| subject.display_name() == name)
    }
}
