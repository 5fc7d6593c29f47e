//! Asynchronous, durability-biased file logging sink.
//!
//! Producers queue records without blocking on disk I/O; a single writer
//! task appends them to one file in arrival order and flushes the stream
//! after every record, so each accepted record is durable before the next
//! is processed.
//!
//! # Examples
//!
//! Rendering the on-disk line format:
//! ```
//! use chrono::{TimeZone, Utc};
//! use linelog::{fmt, message::LogMessage, types::LogLevel};
//!
//! let ts = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
//! let line = fmt::render_line(&LogMessage::new(LogLevel::Info, "net", ts, "connected"));
//! assert_eq!(line, "2026-08-06T12:00:00+0000 INFO {net}: connected");
//! ```
//!
//! Running the logger against a file:
//! ```no_run
//! use linelog::logger::{FileLogger, LogConfig};
//! use linelog::types::LogLevel;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut logger = FileLogger::new("file-logger");
//! logger
//!     .start(&LogConfig {
//!         level: LogLevel::Debug,
//!         file: "logs/app.log".into(),
//!     })
//!     .expect("start");
//! logger.info("net", "connected");
//! logger.flush().await;
//! logger.shutdown().await;
//! # }
//! ```
#![deny(missing_docs)]

/// Timestamp and line rendering.
pub mod fmt;
/// Log directory preflight helpers.
pub mod fs;
/// Logger lifecycle, configuration, and writer task.
pub mod logger;
/// Log record value type.
pub mod message;
/// Producer/consumer FIFO hand-off.
pub mod queue;
/// Append-and-flush sink seam and file implementation.
pub mod sink;
/// Shared severity and time primitives.
pub mod types;
