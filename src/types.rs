//! Shared severity and time primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point in time carried by a log record.
pub type Timestamp = DateTime<Utc>;

/// Record severity, most severe first.
///
/// The derived order makes `Error` the smallest value, so a record is
/// enabled when its level is `<=` the configured level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Unrecoverable or attention-demanding condition.
    Error,
    /// Degraded but continuing condition.
    Warn,
    /// Normal operational event.
    Info,
    /// Diagnostic detail.
    Debug,
}

impl LogLevel {
    /// On-disk marker text for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// True when a record at `candidate` should be written while this
    /// level is configured.
    pub fn enables(self, candidate: LogLevel) -> bool {
        candidate <= self
    }
}
