/// Data Transfer Objects for application layer
///
/// DTOs carry validated input into the use case and its results back
/// out to the CLI, keeping the domain layer isolated.
mod report_request;
mod report_response;

pub use report_request::ReportRequest;
pub use report_response::{ReportOutcome, ReportResponse};
