use async_trait::async_trait;
use audit_report::prelude::*;
use std::collections::{BTreeSet, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    calls: Vec<String>,
    staged: BTreeSet<String>,
    statuses: VecDeque<String>,
}

/// Mock AuditManagerClient serving paged folders and a status sequence
///
/// The last status is repeated once the sequence is exhausted. Staging
/// calls update an in-memory attached set.
#[derive(Clone)]
pub struct MockAuditManagerClient {
    pages: Vec<Vec<EvidenceFolder>>,
    failing_operation: Option<&'static str>,
    state: Arc<Mutex<State>>,
}

impl MockAuditManagerClient {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            failing_operation: None,
            state: Arc::default(),
        }
    }

    /// Adds one page of `(id, name)` folders
    pub fn with_page(mut self, folders: &[(&str, &str)]) -> Self {
        self.pages.push(
            folders
                .iter()
                .map(|(id, name)| EvidenceFolder::new(*id, *name))
                .collect(),
        );
        self
    }

    pub fn with_statuses(self, statuses: &[&str]) -> Self {
        self.state.lock().unwrap().statuses = statuses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_staged(self, folder_ids: &[&str]) -> Self {
        self.state.lock().unwrap().staged = folder_ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Makes the named operation fail with a remote error
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing_operation = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(operation))
            .count()
    }

    pub fn staged(&self) -> BTreeSet<String> {
        self.state.lock().unwrap().staged.clone()
    }

    fn record(&self, operation: &'static str, detail: impl std::fmt::Display) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(format!("{} {}", operation, detail));

        if self.failing_operation == Some(operation) {
            return Err(AuditReportError::RemoteCall {
                operation,
                details: "AccessDeniedException: not authorized".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuditManagerClient for MockAuditManagerClient {
    async fn get_assessment(&self, assessment_id: &AssessmentId) -> Result<AssessmentSummary> {
        self.record("get_assessment", assessment_id)?;
        Ok(AssessmentSummary::new(
            *assessment_id,
            Some("Quarterly controls".to_string()),
        ))
    }

    async fn list_evidence_folders(
        &self,
        _assessment_id: &AssessmentId,
        next_token: Option<String>,
    ) -> Result<EvidenceFolderPage> {
        self.record("list_evidence_folders", next_token.as_deref().unwrap_or("-"))?;

        let index = match next_token {
            None => 0,
            Some(token) => token.trim_start_matches("token-").parse::<usize>()?,
        };
        let folders = self.pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.pages.len()).then(|| format!("token-{}", index + 1));

        Ok(EvidenceFolderPage::new(folders, next))
    }

    async fn disassociate_folder(
        &self,
        _assessment_id: &AssessmentId,
        folder_id: &EvidenceFolderId,
    ) -> Result<()> {
        self.record("disassociate_folder", folder_id)?;
        self.state.lock().unwrap().staged.remove(folder_id.as_str());
        Ok(())
    }

    async fn associate_folder(
        &self,
        _assessment_id: &AssessmentId,
        folder_id: &EvidenceFolderId,
    ) -> Result<()> {
        self.record("associate_folder", folder_id)?;
        self.state
            .lock()
            .unwrap()
            .staged
            .insert(folder_id.to_string());
        Ok(())
    }

    async fn create_report(
        &self,
        _assessment_id: &AssessmentId,
        settings: &ReportSettings,
    ) -> Result<ReportId> {
        self.record("create_report", settings.name())?;
        Ok(ReportId::new("report-0001"))
    }

    async fn get_report_status(&self, report_id: &ReportId) -> Result<ReportStatus> {
        self.record("get_report_status", report_id)?;
        let mut state = self.state.lock().unwrap();
        let status = if state.statuses.len() > 1 {
            state.statuses.pop_front()
        } else {
            state.statuses.front().cloned()
        };
        Ok(status
            .map(|s| ReportStatus::from_remote(&s))
            .unwrap_or(ReportStatus::InProgress))
    }

    async fn get_report_download_url(
        &self,
        _assessment_id: &AssessmentId,
        report_id: &ReportId,
    ) -> Result<String> {
        self.record("get_report_download_url", report_id)?;
        Ok(format!(
            "https://reports.example.com/{}.pdf?X-Amz-Signature=secret",
            report_id
        ))
    }
}
