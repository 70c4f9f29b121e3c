use crate::audit_reporting::domain::{AssessmentId, EvidenceFolderId, ReportId};
use std::path::PathBuf;

/// How the report generation step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report completed and was saved locally
    Downloaded {
        report_id: ReportId,
        path: PathBuf,
        bytes: u64,
    },
    /// The poll ceiling was reached before the report completed
    TimedOut { report_id: ReportId },
    /// The run was cancelled by the caller; `report_id` is `None` when
    /// cancellation came before the report was created
    Cancelled { report_id: Option<ReportId> },
}

impl ReportOutcome {
    /// Id of the created report, if the run got that far
    pub fn report_id(&self) -> Option<&ReportId> {
        match self {
            ReportOutcome::Downloaded { report_id, .. } | ReportOutcome::TimedOut { report_id } => {
                Some(report_id)
            }
            ReportOutcome::Cancelled { report_id } => report_id.as_ref(),
        }
    }

    /// Path of the saved report, when one was downloaded
    pub fn downloaded_path(&self) -> Option<&PathBuf> {
        match self {
            ReportOutcome::Downloaded { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// ReportResponse - Result of a full run of the assessment report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub assessment_id: AssessmentId,
    /// Evidence folders that were re-staged for the report
    pub staged_folders: Vec<EvidenceFolderId>,
    pub outcome: ReportOutcome,
}

impl ReportResponse {
    pub fn new(
        assessment_id: AssessmentId,
        staged_folders: Vec<EvidenceFolderId>,
        outcome: ReportOutcome,
    ) -> Self {
        Self {
            assessment_id,
            staged_folders,
            outcome,
        }
    }
}
