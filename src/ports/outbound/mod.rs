/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Audit Manager, HTTP, console).
pub mod audit_manager_client;
pub mod input_prompt;
pub mod progress_reporter;
pub mod report_downloader;

pub use audit_manager_client::AuditManagerClient;
pub use input_prompt::InputPrompt;
pub use progress_reporter::ProgressReporter;
pub use report_downloader::ReportDownloader;
