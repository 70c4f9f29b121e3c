/// Result alias with anyhow::Error as the error type.
///
/// Domain errors are `AuditReportError` values wrapped into anyhow so that
/// callers can attach context with `anyhow::Context`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
