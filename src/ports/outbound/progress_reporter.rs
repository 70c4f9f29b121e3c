/// ProgressReporter port - the logging handle of the report workflow
///
/// Created once at startup and injected into the use case; the core never
/// reaches for a global logger. Messages carry a level so adapters can
/// render them the way the console expects.
pub trait ProgressReporter {
    /// Reports an informational step
    fn info(&self, message: &str);

    /// Reports a recoverable problem or an unexpected remote value
    fn warn(&self, message: &str);

    /// Reports a failure that is about to be returned to the caller
    fn error(&self, message: &str);

    /// Reports position within a bounded wait
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Ends any running progress display and reports the final message
    fn completion(&self, message: &str);
}
