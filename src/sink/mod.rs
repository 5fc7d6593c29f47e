//! Append-and-flush seam between the writer and the filesystem.

/// Append-mode file implementation.
pub mod file;

use thiserror::Error;

/// Errors surfaced by a sink implementation.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Underlying I/O failure.
    #[error("sink I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Implementation-specific failure.
    #[error("{0}")]
    Message(String),
}

/// Result alias for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for rendered log lines.
///
/// Implementations perform blocking I/O; the writer calls them from a
/// blocking context. One line per call, no trailing newline in `line`.
pub trait LineSink: Send {
    /// Appends `line` plus a line terminator.
    fn append_line(&mut self, line: &str) -> SinkResult<()>;

    /// Pushes buffered output toward the OS.
    fn flush(&mut self) -> SinkResult<()> {
        Ok(())
    }
}
