use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrapping scripts to distinguish a downloaded report
/// from a run that finished without one, and both from a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was generated and downloaded
    Success = 0,
    /// The run ended without a download (poll ceiling reached or cancelled)
    ReportNotDownloaded = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, AWS API error, download error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ReportNotDownloaded => write!(f, "Report Not Downloaded (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for assessment report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum AuditReportError {
    #[error("Provided value is not a valid UUID: {value}\nDetails: {details}\n\n💡 Hint: The assessment ID looks like 11111111-1111-1111-1111-111111111111")]
    InvalidAssessmentId { value: String, details: String },

    #[error("Invalid date format: {value}\n\n💡 Hint: Use YYYY-MM-DD (e.g. 2024-05-01)")]
    InvalidEvidenceDate { value: String },

    #[error("Audit Manager call {operation} failed\nDetails: {details}\n\n💡 Hint: Check your AWS credentials, region and the assessment ID")]
    RemoteCall {
        operation: &'static str,
        details: String,
    },

    #[error("Audit Manager response for {operation} is missing the '{field}' field")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("Assessment report {report_id} was not found in the report listing")]
    ReportNotFound { report_id: String },

    #[error("Failed to download report from {url}\nDetails: {details}\n\n💡 Hint: The pre-signed URL is short-lived; run the tool again to get a fresh one")]
    DownloadFailed { url: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for settings and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ReportNotDownloaded.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ReportNotDownloaded),
            "Report Not Downloaded (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_assessment_id_display() {
        let error = AuditReportError::InvalidAssessmentId {
            value: "not-a-uuid".to_string(),
            details: "invalid character".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("not a valid UUID"));
        assert!(display.contains("not-a-uuid"));
        assert!(display.contains("invalid character"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_evidence_date_display() {
        let error = AuditReportError::InvalidEvidenceDate {
            value: "2024-13-45".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid date format"));
        assert!(display.contains("2024-13-45"));
    }

    #[test]
    fn test_remote_call_display() {
        let error = AuditReportError::RemoteCall {
            operation: "GetAssessment",
            details: "ResourceNotFoundException".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("GetAssessment"));
        assert!(display.contains("ResourceNotFoundException"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_field_display() {
        let error = AuditReportError::MissingField {
            operation: "CreateAssessmentReport",
            field: "assessmentReport.id",
        };
        assert_eq!(
            format!("{}", error),
            "Audit Manager response for CreateAssessmentReport is missing the 'assessmentReport.id' field"
        );
    }

    #[test]
    fn test_download_failed_display() {
        let error = AuditReportError::DownloadFailed {
            url: "https://example.com/report.pdf".to_string(),
            details: "status 403".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("https://example.com/report.pdf"));
        assert!(display.contains("status 403"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AuditReportError::FileWriteError {
            path: PathBuf::from("/test/report.pdf"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.pdf"));
        assert!(display.contains("Permission denied"));
    }
}
