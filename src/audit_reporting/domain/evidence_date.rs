use crate::shared::error::AuditReportError;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layouts accepted for an evidence date. chrono accepts non-padded
/// month and day numbers for all of them. A slash-separated date with
/// the year last reads month first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y %m %d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

/// `%.f` also matches a timestamp without fractional seconds
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date of the evidence to include in the report
///
/// Evidence folders are named after the day they collect evidence for, so
/// the `YYYY-MM-DD` rendering of this value is compared verbatim against
/// folder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvidenceDate(NaiveDate);

impl EvidenceDate {
    /// Parses an evidence date from user input
    ///
    /// # Errors
    /// Returns `AuditReportError::InvalidEvidenceDate` when no known layout matches.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        if let Some(date) = parse_compact(trimmed) {
            return Ok(Self(date));
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(Self(date));
            }
        }

        // The date is taken in the offset the timestamp was written in
        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(date_time.date_naive()));
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(date_time.date()));
            }
        }

        Err(AuditReportError::InvalidEvidenceDate {
            value: trimmed.to_string(),
        }
        .into())
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns true when an evidence folder name refers to this date
    pub fn matches_folder_name(&self, folder_name: &str) -> bool {
        folder_name == self.to_string()
    }
}

/// `YYYYMMDD` without separators
fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

impl From<NaiveDate> for EvidenceDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for EvidenceDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
