pub mod complaint_subject;
