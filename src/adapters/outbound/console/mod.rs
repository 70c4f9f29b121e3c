/// Console adapters for progress output and interactive input
mod progress_reporter;
mod stdin_prompt;

pub use progress_reporter::StderrProgressReporter;
pub use stdin_prompt::StdinPrompt;
