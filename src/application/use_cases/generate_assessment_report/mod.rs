use crate::application::dto::{ReportOutcome, ReportRequest, ReportResponse};
use crate::audit_reporting::domain::{
    AssessmentId, AssessmentSummary, EvidenceDate, EvidenceFolder, EvidenceFolderId,
    PollOutcome, PollSchedule, ReportId, ReportSettings, ReportStatus,
};
use crate::audit_reporting::services::FolderSelector;
use crate::ports::outbound::{AuditManagerClient, ProgressReporter, ReportDownloader};
use crate::shared::security::validate_output_directory;
use crate::shared::Result;
use anyhow::Context;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Extension of downloaded report files
const REPORT_FILE_EXTENSION: &str = "pdf";

/// GenerateAssessmentReportUseCase - Builds a one-day assessment report
///
/// Orchestrates the whole workflow through injected ports:
/// existence check, evidence folder re-staging, report creation, status
/// polling and download. Every remote call is awaited before the next one
/// starts; nothing is retried except the status read inside the poll loop.
///
/// # Type Parameters
/// * `C` - AuditManagerClient implementation
/// * `D` - ReportDownloader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateAssessmentReportUseCase<C, D, PR> {
    client: C,
    downloader: D,
    progress_reporter: PR,
    report_settings: ReportSettings,
    poll_schedule: PollSchedule,
}

impl<C, D, PR> GenerateAssessmentReportUseCase<C, D, PR>
where
    C: AuditManagerClient,
    D: ReportDownloader,
    PR: ProgressReporter,
{
    /// Creates a new use case with default report settings and poll schedule
    pub fn new(client: C, downloader: D, progress_reporter: PR) -> Self {
        Self {
            client,
            downloader,
            progress_reporter,
            report_settings: ReportSettings::default(),
            poll_schedule: PollSchedule::default(),
        }
    }

    pub fn with_report_settings(mut self, report_settings: ReportSettings) -> Self {
        self.report_settings = report_settings;
        self
    }

    pub fn with_poll_schedule(mut self, poll_schedule: PollSchedule) -> Self {
        self.poll_schedule = poll_schedule;
        self
    }

    /// Runs the full workflow for one assessment and evidence date
    ///
    /// Staging changes are not rolled back when a later step fails.
    /// Cancellation is honoured before staging starts, before the report
    /// is created and during the status wait. A detached folder set is
    /// always attached again before the run stops.
    ///
    /// # Arguments
    /// * `request` - Validated assessment id, evidence date and output directory
    /// * `cancel` - Cancelling it ends the run at the next checkpoint
    pub async fn execute(
        &self,
        request: ReportRequest,
        cancel: &CancellationToken,
    ) -> Result<ReportResponse> {
        validate_output_directory(&request.output_dir)?;

        let assessment_id = request.assessment_id;

        // Step 1: Confirm the assessment exists
        self.verify_assessment(&assessment_id).await?;

        if cancel.is_cancelled() {
            return Ok(self.cancelled_before_report(assessment_id, Vec::new()));
        }

        // Step 2: Detach the day's folders from the staging area
        let folders = self
            .clear_staging(&assessment_id, &request.evidence_date)
            .await?;

        if folders.is_empty() {
            self.progress_reporter.warn(&format!(
                "⚠️  No evidence folder named {} was found; the report will not contain evidence for that day.",
                request.evidence_date
            ));
        }

        // Step 3: Attach the same set again
        self.stage_folders(&assessment_id, &folders).await?;

        if cancel.is_cancelled() {
            return Ok(self.cancelled_before_report(assessment_id, folders));
        }

        // Step 4: Create, wait for and download the report
        let outcome = self
            .generate_report(&assessment_id, &request.output_dir, cancel)
            .await?;

        Ok(ReportResponse::new(assessment_id, folders, outcome))
    }

    fn cancelled_before_report(
        &self,
        assessment_id: AssessmentId,
        folders: Vec<EvidenceFolderId>,
    ) -> ReportResponse {
        self.progress_reporter
            .completion("Cancelled before a report was created.");
        ReportResponse::new(
            assessment_id,
            folders,
            ReportOutcome::Cancelled { report_id: None },
        )
    }

    /// Confirms that the assessment exists
    ///
    /// # Errors
    /// The remote error is reported and returned; it is never retried.
    pub async fn verify_assessment(&self, assessment_id: &AssessmentId) -> Result<AssessmentSummary> {
        self.progress_reporter
            .info(&format!("🔎 Checking assessment {}", assessment_id));

        let summary = self.reported(
            self.client.get_assessment(assessment_id).await,
            format!("Failed to get assessment {}.", assessment_id),
        )?;

        match summary.name.as_deref() {
            Some(name) => self
                .progress_reporter
                .info(&format!("✅ Found assessment \"{}\"", name)),
            None => self.progress_reporter.info("✅ Found assessment"),
        }

        Ok(summary)
    }

    /// Collects the ids of the folders named after `evidence_date`
    ///
    /// Every listing page is fetched before the selection is made, so the
    /// result does not depend on where page boundaries fall.
    pub async fn find_evidence_folders(
        &self,
        assessment_id: &AssessmentId,
        evidence_date: &EvidenceDate,
    ) -> Result<Vec<EvidenceFolderId>> {
        let mut folders: Vec<EvidenceFolder> = Vec::new();
        let mut next_token: Option<String> = None;
        let mut seen_tokens: HashSet<String> = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self.reported(
                self.client
                    .list_evidence_folders(assessment_id, next_token.clone())
                    .await,
                format!("Failed to list evidence folders of assessment {}.", assessment_id),
            )?;
            pages += 1;
            folders.extend(page.folders);

            match page.next_token {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    anyhow::bail!(
                        "Evidence folder listing returned the same page token twice ({})",
                        token
                    );
                }
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        let selected = FolderSelector::select(&folders, evidence_date);
        self.progress_reporter.info(&format!(
            "📂 {} of {} evidence folder(s) across {} page(s) match {}",
            selected.len(),
            folders.len(),
            pages,
            evidence_date
        ));

        Ok(selected)
    }

    /// Removes the day's folders from the report staging area
    ///
    /// # Returns
    /// The ids of the folders that were detached
    pub async fn clear_staging(
        &self,
        assessment_id: &AssessmentId,
        evidence_date: &EvidenceDate,
    ) -> Result<Vec<EvidenceFolderId>> {
        let folder_ids = self
            .find_evidence_folders(assessment_id, evidence_date)
            .await?;

        for folder_id in &folder_ids {
            self.reported(
                self.client
                    .disassociate_folder(assessment_id, folder_id)
                    .await,
                format!("Failed to remove evidence folder {} from the report.", folder_id),
            )?;
        }

        Ok(folder_ids)
    }

    /// Adds folders to the report staging area
    pub async fn stage_folders(
        &self,
        assessment_id: &AssessmentId,
        folder_ids: &[EvidenceFolderId],
    ) -> Result<()> {
        for folder_id in folder_ids {
            self.reported(
                self.client.associate_folder(assessment_id, folder_id).await,
                format!("Failed to add evidence folder {} to the report.", folder_id),
            )?;
        }

        if !folder_ids.is_empty() {
            self.progress_reporter.info(&format!(
                "📎 Staged {} evidence folder(s) for the report",
                folder_ids.len()
            ));
        }

        Ok(())
    }

    /// Creates the report, waits for it and downloads it when complete
    ///
    /// Reaching the poll ceiling or being cancelled is not an error: the
    /// outcome says so and nothing is downloaded.
    pub async fn generate_report(
        &self,
        assessment_id: &AssessmentId,
        output_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<ReportOutcome> {
        let report_id = self.create_report(assessment_id).await?;

        match self.wait_for_report(&report_id, cancel).await? {
            PollOutcome::Complete { .. } => {
                let (path, bytes) = self
                    .download_report(assessment_id, &report_id, output_dir)
                    .await?;
                Ok(ReportOutcome::Downloaded {
                    report_id,
                    path,
                    bytes,
                })
            }
            PollOutcome::TimedOut { .. } => {
                self.progress_reporter
                    .completion("Report generation did not complete in the allocated time.");
                Ok(ReportOutcome::TimedOut { report_id })
            }
            PollOutcome::Cancelled { .. } => {
                self.progress_reporter.completion(&format!(
                    "Stopped waiting for report {}; it may still complete in Audit Manager.",
                    report_id
                ));
                Ok(ReportOutcome::Cancelled {
                    report_id: Some(report_id),
                })
            }
        }
    }

    /// Starts report generation and returns the new report id
    pub async fn create_report(&self, assessment_id: &AssessmentId) -> Result<ReportId> {
        let report_id = self.reported(
            self.client
                .create_report(assessment_id, &self.report_settings)
                .await,
            format!("Failed to create a report for assessment {}.", assessment_id),
        )?;

        self.progress_reporter.info(&format!(
            "📝 Created report \"{}\" ({})",
            self.report_settings.name(),
            report_id
        ));

        Ok(report_id)
    }

    /// Polls the report status at a fixed interval until it is complete
    ///
    /// The status is read, then the wait of one interval is charged against
    /// the ceiling. Any status other than complete counts as pending. The
    /// wait between reads ends early when `cancel` fires.
    pub async fn wait_for_report(
        &self,
        report_id: &ReportId,
        cancel: &CancellationToken,
    ) -> Result<PollOutcome> {
        let interval = self.poll_schedule.interval();
        let timeout = self.poll_schedule.timeout();
        let max_polls = self.poll_schedule.max_polls() as usize;

        let mut elapsed = Duration::ZERO;
        let mut polls = 0u32;
        let mut last_status: Option<ReportStatus> = None;

        self.progress_reporter.info(&format!(
            "⏳ Waiting for report {} (every {}s, up to {}s)",
            report_id,
            interval.as_secs_f64(),
            timeout.as_secs_f64()
        ));

        while elapsed < timeout {
            if cancel.is_cancelled() {
                return Ok(PollOutcome::Cancelled { polls });
            }

            let status = self.reported(
                self.client.get_report_status(report_id).await,
                format!("Failed to read the status of report {}.", report_id),
            )?;
            polls += 1;

            let status_message = format!("status {}", status);
            self.progress_reporter
                .progress(polls as usize, max_polls, Some(&status_message));

            if status.is_complete() {
                return Ok(PollOutcome::Complete { polls, elapsed });
            }

            if last_status.as_ref() != Some(&status)
                && !matches!(status, ReportStatus::InProgress)
            {
                self.progress_reporter.warn(&format!(
                    "⚠️  Report {} reported status {}; still waiting for COMPLETE",
                    report_id, status
                ));
            }
            last_status = Some(status);

            tokio::select! {
                _ = cancel.cancelled() => return Ok(PollOutcome::Cancelled { polls }),
                _ = tokio::time::sleep(interval) => {}
            }
            elapsed += interval;
        }

        Ok(PollOutcome::TimedOut { polls })
    }

    /// Downloads a finished report to `<output_dir>/<random uuid>.pdf`
    ///
    /// # Returns
    /// The path written and its size in bytes
    pub async fn download_report(
        &self,
        assessment_id: &AssessmentId,
        report_id: &ReportId,
        output_dir: &Path,
    ) -> Result<(PathBuf, u64)> {
        let url = self.reported(
            self.client
                .get_report_download_url(assessment_id, report_id)
                .await,
            format!("Failed to get the download URL of report {}.", report_id),
        )?;

        let path = output_dir.join(format!("{}.{}", Uuid::new_v4(), REPORT_FILE_EXTENSION));
        let bytes = self.reported(
            self.downloader.download(&url, &path).await,
            format!("Failed to download report {}.", report_id),
        )?;

        self.progress_reporter
            .completion(&format!("✅ Report saved as {}.", path.display()));

        Ok((path, bytes))
    }

    /// Reports a failed remote call with context before propagating it
    fn reported<T>(&self, result: Result<T>, context: String) -> Result<T> {
        if let Err(e) = &result {
            self.progress_reporter
                .error(&format!("{} {}", context, e));
        }
        result.context(context)
    }
}
