//! Log record value type.

use crate::types::{LogLevel, Timestamp};

/// Immutable record of one log event.
///
/// Ownership moves producer → queue → writer; the record is never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    /// Record severity.
    pub level: LogLevel,
    /// Short component identifier printed inside braces.
    pub tag: String,
    /// Event time as supplied by the producer.
    pub timestamp: Timestamp,
    /// Record body.
    pub text: String,
}

impl LogMessage {
    /// Builds a record from its parts.
    pub fn new(
        level: LogLevel,
        tag: impl Into<String>,
        timestamp: Timestamp,
        text: impl Into<String>,
    ) -> Self {
        Self {
            level,
            tag: tag.into(),
            timestamp,
            text: text.into(),
        }
    }
}
