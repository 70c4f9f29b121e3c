use crate::shared::error::AuditReportError;
use crate::shared::Result;

/// Default report name used when none is configured
pub const DEFAULT_REPORT_NAME: &str = "ReportViaScript";

/// Default report description used when none is configured
pub const DEFAULT_REPORT_DESCRIPTION: &str = "Report generated via script.";

/// Maximum report name length accepted by Audit Manager
const MAX_REPORT_NAME_LENGTH: usize = 300;

/// Maximum report description length accepted by Audit Manager
const MAX_REPORT_DESCRIPTION_LENGTH: usize = 1000;

/// NewType wrapper for an assessment report identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportId(String);

impl ReportId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation status of an assessment report
///
/// Only `Complete` ends polling. `Failed` and unknown values are observed
/// like `InProgress` until the poll ceiling is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    InProgress,
    Complete,
    Failed,
    Other(String),
}

impl ReportStatus {
    /// Parses the status value reported by Audit Manager (case-insensitive)
    pub fn from_remote(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "COMPLETE" => ReportStatus::Complete,
            "IN_PROGRESS" | "PENDING" => ReportStatus::InProgress,
            "FAILED" => ReportStatus::Failed,
            _ => ReportStatus::Other(value.to_string()),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ReportStatus::Complete)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::InProgress => write!(f, "IN_PROGRESS"),
            ReportStatus::Complete => write!(f, "COMPLETE"),
            ReportStatus::Failed => write!(f, "FAILED"),
            ReportStatus::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Name and description given to created reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    name: String,
    description: String,
}

impl ReportSettings {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(AuditReportError::Validation {
                message: "Report name cannot be empty".to_string(),
            }
            .into());
        }

        if name.chars().count() > MAX_REPORT_NAME_LENGTH {
            return Err(AuditReportError::Validation {
                message: format!(
                    "Report name is too long ({} characters). Maximum allowed: {} characters",
                    name.chars().count(),
                    MAX_REPORT_NAME_LENGTH
                ),
            }
            .into());
        }

        if description.chars().count() > MAX_REPORT_DESCRIPTION_LENGTH {
            return Err(AuditReportError::Validation {
                message: format!(
                    "Report description is too long ({} characters). Maximum allowed: {} characters",
                    description.chars().count(),
                    MAX_REPORT_DESCRIPTION_LENGTH
                ),
            }
            .into());
        }

        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_REPORT_NAME.to_string(),
            description: DEFAULT_REPORT_DESCRIPTION.to_string(),
        }
    }
}
