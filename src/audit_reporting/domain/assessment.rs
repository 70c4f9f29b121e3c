use crate::shared::error::AuditReportError;
use crate::shared::Result;
use uuid::Uuid;

/// NewType wrapper for an Audit Manager assessment identifier
///
/// Any textual form accepted by `uuid` (hyphenated, simple, braced, URN) is
/// accepted, case-insensitively. The identifier is always rendered in the
/// lowercase hyphenated form the Audit Manager API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssessmentId(Uuid);

impl AssessmentId {
    /// Parses and validates an assessment identifier
    ///
    /// # Errors
    /// Returns `AuditReportError::InvalidAssessmentId` when the value is not a UUID.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let uuid = Uuid::parse_str(trimmed).map_err(|e| AuditReportError::InvalidAssessmentId {
            value: trimmed.to_string(),
            details: e.to_string(),
        })?;
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for AssessmentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Summary of an assessment returned by the existence check
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSummary {
    pub id: AssessmentId,
    pub name: Option<String>,
}

impl AssessmentSummary {
    pub fn new(id: AssessmentId, name: Option<String>) -> Self {
        Self { id, name }
    }
}
