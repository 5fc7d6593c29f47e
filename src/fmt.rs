//! Timestamp and line rendering for the on-disk text format.

use crate::message::LogMessage;
use crate::types::Timestamp;

/// strftime-style layout of the leading timestamp, e.g.
/// `2026-08-06T14:03:51+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Renders a timestamp with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders one record as a line, without the trailing newline.
pub fn render_line(message: &LogMessage) -> String {
    format!(
        "{} {} {{{}}}: {}",
        format_timestamp(&message.timestamp),
        message.level.as_str(),
        message.tag,
        message.text
    )
}
