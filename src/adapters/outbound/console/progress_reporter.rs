use crate::ports::outbound::ProgressReporter;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Warn,
    Error,
}

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing timestamped
/// `<time> - <LEVEL> - <message>` lines to stderr so they don't interfere
/// with stdout. Uses indicatif for the bar shown while a report is polled.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let label = match (level, self.colored) {
            (Level::Info, true) => "INFO".green().to_string(),
            (Level::Warn, true) => "WARNING".yellow().to_string(),
            (Level::Error, true) => "ERROR".red().bold().to_string(),
            (Level::Info, false) => "INFO".to_string(),
            (Level::Warn, false) => "WARNING".to_string(),
            (Level::Error, false) => "ERROR".to_string(),
        };
        format!("{} - {} - {}", timestamp, label, message)
    }

    fn emit(&self, level: Level, message: &str) {
        let line = self.format_line(level, message);
        // Print above an active bar instead of tearing it
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() && !pb.is_hidden() => pb.println(line),
            _ => eprintln!("{}", line),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        match pb_option.as_ref() {
            Some(pb) if !pb.is_finished() => pb.clone(),
            _ => {
                let pb = ProgressBar::new(total as u64);
                if let Ok(style) = ProgressStyle::default_bar().template(
                    "   {spinner:.green} [{bar:40.cyan/blue}] poll {pos}/{len} ({elapsed}) - {msg}",
                ) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                *pb_option = Some(pb.clone());
                pb
            }
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.finish_progress_bar();
        self.emit(Level::Error, message);
    }

    fn progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_length(total as u64);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn completion(&self, message: &str) {
        self.finish_progress_bar();
        self.emit(Level::Info, message);
    }
}
