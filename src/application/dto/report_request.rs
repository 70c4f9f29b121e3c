use crate::audit_reporting::domain::{AssessmentId, EvidenceDate};
use std::path::PathBuf;

/// ReportRequest - Validated input of the assessment report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Assessment to build the report for
    pub assessment_id: AssessmentId,
    /// Day of evidence to stage
    pub evidence_date: EvidenceDate,
    /// Directory the downloaded report is written to
    pub output_dir: PathBuf,
}

impl ReportRequest {
    pub fn new(assessment_id: AssessmentId, evidence_date: EvidenceDate, output_dir: PathBuf) -> Self {
        Self {
            assessment_id,
            evidence_date,
            output_dir,
        }
    }
}
