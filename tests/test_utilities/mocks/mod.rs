/// Mock implementations for testing
mod mock_audit_manager_client;
mod mock_input_prompt;
mod mock_progress_reporter;
mod mock_report_downloader;

pub use mock_audit_manager_client::MockAuditManagerClient;
pub use mock_input_prompt::MockInputPrompt;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_downloader::MockReportDownloader;
