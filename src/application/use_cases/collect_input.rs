use crate::application::dto::ReportRequest;
use crate::audit_reporting::domain::{AssessmentId, EvidenceDate};
use crate::ports::outbound::{InputPrompt, ProgressReporter};
use crate::shared::Result;
use std::path::PathBuf;

pub const ASSESSMENT_ID_PROMPT: &str = "Provide assessment ID [UUID]: ";
pub const EVIDENCE_DATE_PROMPT: &str = "Provide evidence date [YYYY-MM-DD]: ";

/// Raw, unvalidated input as given on the command line
#[derive(Debug, Clone, Default)]
pub struct RawReportInput {
    pub assessment_id: Option<String>,
    pub evidence_date: Option<String>,
    pub output_dir: PathBuf,
}

/// Builds a validated `ReportRequest`, prompting for missing values
///
/// Values present in `input` are used as-is; the prompt is only asked for
/// the missing ones, identifier first. Both values are read before either
/// is validated. A validation failure is reported through `reporter` and
/// then returned unchanged.
pub fn collect_report_request<P, PR>(
    prompt: &P,
    reporter: &PR,
    input: RawReportInput,
) -> Result<ReportRequest>
where
    P: InputPrompt,
    PR: ProgressReporter,
{
    let raw_id = match input.assessment_id {
        Some(value) => value,
        None => prompt.ask(ASSESSMENT_ID_PROMPT)?,
    };
    let raw_date = match input.evidence_date {
        Some(value) => value,
        None => prompt.ask(EVIDENCE_DATE_PROMPT)?,
    };

    let assessment_id = AssessmentId::parse(&raw_id.trim().to_lowercase()).inspect_err(|_| {
        reporter.error(&format!("Provided value is not a valid UUID: {}", raw_id.trim()));
    })?;

    let evidence_date = EvidenceDate::parse(&raw_date).inspect_err(|_| {
        reporter.error(&format!("Invalid date format: {}", raw_date.trim()));
    })?;

    Ok(ReportRequest::new(
        assessment_id,
        evidence_date,
        input.output_dir,
    ))
}
