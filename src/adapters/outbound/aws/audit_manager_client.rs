use crate::audit_reporting::domain::{
    AssessmentId, AssessmentSummary, EvidenceFolder, EvidenceFolderId, EvidenceFolderPage,
    ReportId, ReportSettings, ReportStatus,
};
use crate::ports::outbound::AuditManagerClient;
use crate::shared::error::AuditReportError;
use crate::shared::Result;
use async_trait::async_trait;
use aws_sdk_auditmanager::error::DisplayErrorContext;
use aws_sdk_auditmanager::Client;
use tracing::{debug, info, warn};

/// Page size requested from listing operations (service maximum)
const PAGE_SIZE: i32 = 1000;

/// AwsAuditManagerClient adapter backed by the AWS SDK
///
/// Pagination tokens are passed through unchanged. Audit Manager has no
/// call returning the status of a single report, so the status is looked
/// up in `ListAssessmentReports`.
pub struct AwsAuditManagerClient {
    client: Client,
}

impl AwsAuditManagerClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn remote_error<E>(operation: &'static str, error: E) -> anyhow::Error
where
    E: std::error::Error,
{
    AuditReportError::RemoteCall {
        operation,
        details: DisplayErrorContext(error).to_string(),
    }
    .into()
}

fn missing_field(operation: &'static str, field: &'static str) -> anyhow::Error {
    AuditReportError::MissingField { operation, field }.into()
}

/// Builds a domain folder, skipping entries without an id or a name
fn to_evidence_folder(id: Option<&str>, name: Option<&str>) -> Option<EvidenceFolder> {
    match (id, name) {
        (Some(id), Some(name)) if !id.is_empty() => Some(EvidenceFolder::new(id, name)),
        _ => None,
    }
}

/// Finds the status of `report_id` among `(id, status)` listing entries
fn find_report_status<'a, I>(entries: I, report_id: &ReportId) -> Option<ReportStatus>
where
    I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
{
    entries
        .into_iter()
        .find(|(id, _)| *id == Some(report_id.as_str()))
        .map(|(_, status)| {
            status
                .map(ReportStatus::from_remote)
                .unwrap_or(ReportStatus::InProgress)
        })
}

#[async_trait]
impl AuditManagerClient for AwsAuditManagerClient {
    async fn get_assessment(&self, assessment_id: &AssessmentId) -> Result<AssessmentSummary> {
        debug!(assessment_id = %assessment_id, "GetAssessment");

        let output = self
            .client
            .get_assessment()
            .assessment_id(assessment_id.to_string())
            .send()
            .await
            .map_err(|e| remote_error("GetAssessment", e))?;

        let name = output
            .assessment()
            .and_then(|assessment| assessment.metadata())
            .and_then(|metadata| metadata.name())
            .map(str::to_string);

        Ok(AssessmentSummary::new(*assessment_id, name))
    }

    async fn list_evidence_folders(
        &self,
        assessment_id: &AssessmentId,
        next_token: Option<String>,
    ) -> Result<EvidenceFolderPage> {
        let output = self
            .client
            .get_evidence_folders_by_assessment()
            .assessment_id(assessment_id.to_string())
            .set_next_token(next_token)
            .max_results(PAGE_SIZE)
            .send()
            .await
            .map_err(|e| remote_error("GetEvidenceFoldersByAssessment", e))?;

        let listed = output.evidence_folders();
        let folders: Vec<EvidenceFolder> = listed
            .iter()
            .filter_map(|folder| to_evidence_folder(folder.id(), folder.name()))
            .collect();

        if folders.len() < listed.len() {
            warn!(
                skipped = listed.len() - folders.len(),
                "Evidence folders without id or name were skipped"
            );
        }

        debug!(
            assessment_id = %assessment_id,
            folders = folders.len(),
            has_more = output.next_token().is_some(),
            "GetEvidenceFoldersByAssessment page"
        );

        Ok(EvidenceFolderPage::new(
            folders,
            output.next_token().map(str::to_string),
        ))
    }

    async fn disassociate_folder(
        &self,
        assessment_id: &AssessmentId,
        folder_id: &EvidenceFolderId,
    ) -> Result<()> {
        self.client
            .disassociate_assessment_report_evidence_folder()
            .assessment_id(assessment_id.to_string())
            .evidence_folder_id(folder_id.as_str())
            .send()
            .await
            .map_err(|e| remote_error("DisassociateAssessmentReportEvidenceFolder", e))?;

        debug!(folder_id = %folder_id, "Evidence folder removed from report staging");
        Ok(())
    }

    async fn associate_folder(
        &self,
        assessment_id: &AssessmentId,
        folder_id: &EvidenceFolderId,
    ) -> Result<()> {
        self.client
            .associate_assessment_report_evidence_folder()
            .assessment_id(assessment_id.to_string())
            .evidence_folder_id(folder_id.as_str())
            .send()
            .await
            .map_err(|e| remote_error("AssociateAssessmentReportEvidenceFolder", e))?;

        debug!(folder_id = %folder_id, "Evidence folder added to report staging");
        Ok(())
    }

    async fn create_report(
        &self,
        assessment_id: &AssessmentId,
        settings: &ReportSettings,
    ) -> Result<ReportId> {
        let output = self
            .client
            .create_assessment_report()
            .name(settings.name())
            .description(settings.description())
            .assessment_id(assessment_id.to_string())
            .send()
            .await
            .map_err(|e| remote_error("CreateAssessmentReport", e))?;

        let report_id = output
            .assessment_report()
            .and_then(|report| report.id())
            .map(ReportId::new)
            .ok_or_else(|| missing_field("CreateAssessmentReport", "assessmentReport.id"))?;

        info!(report_id = %report_id, "Assessment report created");
        Ok(report_id)
    }

    async fn get_report_status(&self, report_id: &ReportId) -> Result<ReportStatus> {
        let mut next_token: Option<String> = None;

        loop {
            let output = self
                .client
                .list_assessment_reports()
                .set_next_token(next_token.take())
                .max_results(PAGE_SIZE)
                .send()
                .await
                .map_err(|e| remote_error("ListAssessmentReports", e))?;

            let entries = output
                .assessment_reports()
                .iter()
                .map(|report| (report.id(), report.status().map(|s| s.as_str())));

            if let Some(status) = find_report_status(entries, report_id) {
                debug!(report_id = %report_id, status = %status, "Assessment report status");
                return Ok(status);
            }

            match output.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        Err(AuditReportError::ReportNotFound {
            report_id: report_id.to_string(),
        }
        .into())
    }

    async fn get_report_download_url(
        &self,
        assessment_id: &AssessmentId,
        report_id: &ReportId,
    ) -> Result<String> {
        let output = self
            .client
            .get_assessment_report_url()
            .assessment_report_id(report_id.as_str())
            .assessment_id(assessment_id.to_string())
            .send()
            .await
            .map_err(|e| remote_error("GetAssessmentReportUrl", e))?;

        output
            .pre_signed_url()
            .and_then(|url| url.link())
            .map(str::to_string)
            .ok_or_else(|| missing_field("GetAssessmentReportUrl", "preSignedUrl.link"))
    }
}
