use crate::shared::Result;

/// InputPrompt port for interactive user input
///
/// This port abstracts the console so input collection can be driven by
/// scripted answers in tests.
pub trait InputPrompt {
    /// Shows `message` and returns the line entered by the user, without
    /// the trailing newline
    ///
    /// # Errors
    /// Returns an error if the input stream cannot be read or is closed.
    fn ask(&self, message: &str) -> Result<String>;
}
