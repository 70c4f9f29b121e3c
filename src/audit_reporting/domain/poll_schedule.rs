use crate::shared::error::AuditReportError;
use crate::shared::Result;
use std::time::Duration;

/// Default delay between two report status reads (seconds)
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Default ceiling on the total time spent waiting for a report (seconds)
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 900;

/// Fixed-interval polling schedule with a hard ceiling
///
/// No backoff and no jitter: the status is read, and if the report is not
/// complete the poller waits `interval` and counts it against `timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    interval: Duration,
    timeout: Duration,
}

impl PollSchedule {
    /// # Errors
    /// Returns a validation error when either duration is zero.
    pub fn new(interval: Duration, timeout: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(AuditReportError::Validation {
                message: "Poll interval must be greater than zero".to_string(),
            }
            .into());
        }
        if timeout.is_zero() {
            return Err(AuditReportError::Validation {
                message: "Poll timeout must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(Self { interval, timeout })
    }

    pub fn from_secs(interval_secs: u64, timeout_secs: u64) -> Result<Self> {
        Self::new(
            Duration::from_secs(interval_secs),
            Duration::from_secs(timeout_secs),
        )
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of status reads made before the ceiling is reached
    pub fn max_polls(&self) -> u32 {
        let polls = self.timeout.as_nanos().div_ceil(self.interval.as_nanos());
        u32::try_from(polls).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        }
    }
}

/// How a wait for report generation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Status read as complete after `polls` reads and `elapsed` waiting
    Complete { polls: u32, elapsed: Duration },
    /// Ceiling reached without observing completion
    TimedOut { polls: u32 },
    /// The caller cancelled the wait
    Cancelled { polls: u32 },
}

impl PollOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, PollOutcome::Complete { .. })
    }

    pub fn polls(&self) -> u32 {
        match self {
            PollOutcome::Complete { polls, .. }
            | PollOutcome::TimedOut { polls }
            | PollOutcome::Cancelled { polls } => *polls,
        }
    }
}
