pub mod assessment;
pub mod evidence_date;
pub mod evidence_folder;
pub mod poll_schedule;
pub mod report;

pub use assessment::{AssessmentId, AssessmentSummary};
pub use evidence_date::EvidenceDate;
pub use evidence_folder::{EvidenceFolder, EvidenceFolderId, EvidenceFolderPage};
pub use poll_schedule::{PollOutcome, PollSchedule};
pub use report::{ReportId, ReportSettings, ReportStatus};
