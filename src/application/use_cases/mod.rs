/// Use cases module containing application business logic orchestration
mod collect_input;
mod generate_assessment_report;

pub use collect_input::{
    collect_report_request, RawReportInput, ASSESSMENT_ID_PROMPT, EVIDENCE_DATE_PROMPT,
};
pub use generate_assessment_report::GenerateAssessmentReportUseCase;
