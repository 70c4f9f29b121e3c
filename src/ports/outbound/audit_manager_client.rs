use crate::audit_reporting::domain::{
    AssessmentId, AssessmentSummary, EvidenceFolderId, EvidenceFolderPage, ReportId,
    ReportSettings, ReportStatus,
};
use crate::shared::Result;
use async_trait::async_trait;

/// AuditManagerClient port for the remote compliance service
///
/// This port exposes exactly the Audit Manager operations the report
/// workflow needs, so that a test double can serve canned folder pages and
/// status sequences without network access.
///
/// # Async Support
/// Implementations must be `Send + Sync`. Calls are made one at a time;
/// no retries are expected from implementations.
#[async_trait]
pub trait AuditManagerClient: Send + Sync {
    /// Fetches an assessment, failing if it does not exist
    ///
    /// # Errors
    /// Returns an error if the assessment is unknown or the call is rejected.
    async fn get_assessment(&self, assessment_id: &AssessmentId) -> Result<AssessmentSummary>;

    /// Fetches one page of evidence folders for an assessment
    ///
    /// # Arguments
    /// * `assessment_id` - Assessment whose folders are listed
    /// * `next_token` - `None` for the first page, otherwise the token of the previous page
    async fn list_evidence_folders(
        &self,
        assessment_id: &AssessmentId,
        next_token: Option<String>,
    ) -> Result<EvidenceFolderPage>;

    /// Removes an evidence folder from the assessment report staging area
    async fn disassociate_folder(
        &self,
        assessment_id: &AssessmentId,
        folder_id: &EvidenceFolderId,
    ) -> Result<()>;

    /// Adds an evidence folder to the assessment report staging area
    async fn associate_folder(
        &self,
        assessment_id: &AssessmentId,
        folder_id: &EvidenceFolderId,
    ) -> Result<()>;

    /// Starts generation of an assessment report and returns its id
    async fn create_report(
        &self,
        assessment_id: &AssessmentId,
        settings: &ReportSettings,
    ) -> Result<ReportId>;

    /// Reads the current generation status of a report
    async fn get_report_status(&self, report_id: &ReportId) -> Result<ReportStatus>;

    /// Returns a time-limited download URL for a finished report
    async fn get_report_download_url(
        &self,
        assessment_id: &AssessmentId,
        report_id: &ReportId,
    ) -> Result<String>;
}
