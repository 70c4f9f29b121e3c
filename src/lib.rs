//! audit-report - one-day assessment reports for AWS Audit Manager
//!
//! This library re-stages the evidence folders of a single day, asks Audit
//! Manager to generate an assessment report, waits for it and downloads
//! the result. It follows hexagonal architecture: the workflow only talks
//! to Audit Manager, the network and the console through ports.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`audit_reporting`): Value objects and folder selection
//! - **Application Layer** (`application`): Input collection and the report use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): AWS SDK, HTTP and console implementations
//! - **Shared** (`shared`): Error types and security checks
//!
//! # Example
//!
//! ```no_run
//! use audit_report::prelude::*;
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<()> {
//! let sdk_client = create_audit_manager_client(&AwsConnection::new().with_region("us-east-1")).await;
//!
//! let use_case = GenerateAssessmentReportUseCase::new(
//!     AwsAuditManagerClient::new(sdk_client),
//!     HttpReportDownloader::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReportRequest::new(
//!     AssessmentId::parse("11111111-1111-1111-1111-111111111111")?,
//!     EvidenceDate::parse("2024-05-01")?,
//!     PathBuf::from("."),
//! );
//! let response = use_case.execute(request, &CancellationToken::new()).await?;
//! println!("{:?}", response.outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit_reporting;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::aws::{
        create_audit_manager_client, AwsAuditManagerClient, AwsConnection,
    };
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdinPrompt};
    pub use crate::adapters::outbound::network::HttpReportDownloader;
    pub use crate::application::dto::{ReportOutcome, ReportRequest, ReportResponse};
    pub use crate::application::use_cases::{
        collect_report_request, GenerateAssessmentReportUseCase, RawReportInput,
    };
    pub use crate::audit_reporting::domain::{
        AssessmentId, AssessmentSummary, EvidenceDate, EvidenceFolder, EvidenceFolderId,
        EvidenceFolderPage, PollOutcome, PollSchedule, ReportId, ReportSettings, ReportStatus,
    };
    pub use crate::audit_reporting::services::FolderSelector;
    pub use crate::ports::outbound::{
        AuditManagerClient, InputPrompt, ProgressReporter, ReportDownloader,
    };
    pub use crate::shared::error::{AuditReportError, ExitCode};
    pub use crate::shared::Result;
}
