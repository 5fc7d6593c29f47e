//! File logger lifecycle and the single writer task.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;

use crate::{
    fmt,
    fs::{self, DirState},
    message::LogMessage,
    queue::LogQueue,
    sink::{LineSink, SinkError, SinkResult, file::FileSink},
    types::{LogLevel, Timestamp},
};

/// Errors reported by [`FileLogger::start`].
///
/// `start` never panics and never retries; the `Display` text is the
/// diagnostic, the caller decides whether to try again.
#[derive(Debug, Error)]
pub enum StartError {
    /// The log directory is missing and could not be created, or the
    /// path exists as something other than a directory.
    #[error("log directory {} is unavailable for writing", .dir.display())]
    DirectoryUnavailable {
        /// Directory that was probed.
        dir: PathBuf,
        /// Creation failure, when one occurred.
        #[source]
        source: Option<io::Error>,
    },
    /// Append-mode open of the log file failed.
    #[error("failed to open {} for appending", .path.display())]
    FileOpenFailed {
        /// Target log file.
        path: PathBuf,
        /// Open failure.
        #[source]
        source: io::Error,
    },
    /// The directory probe failed for a reason other than the path being
    /// absent, so the directory is neither known-present nor known-missing.
    #[error("cannot determine the state of log directory {}", .dir.display())]
    UnknownDirectoryState {
        /// Directory that was probed.
        dir: PathBuf,
        /// Probe failure.
        #[source]
        source: io::Error,
    },
}

/// Logger configuration, resolved by the embedding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Most verbose level that will be written.
    pub level: LogLevel,
    /// Target log file path.
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: PathBuf::from("linelog.log"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Constructed, writer not yet spawned.
    Idle,
    Running,
    /// Shut down; terminal.
    Stopped,
}

/// State shared between the handle, the writer task, and flush waiters.
#[derive(Debug, Default)]
struct Shared {
    queue: LogQueue,
    /// Records admitted past the level filter.
    accepted: AtomicU64,
    /// Records consumed and pushed through the sink.
    written: AtomicU64,
    write_notify: Notify,
}

impl Shared {
    fn record_written(&self) {
        self.written.fetch_add(1, Ordering::AcqRel);
        self.write_notify.notify_waiters();
    }
}

/// Durability-biased file logging sink.
///
/// Producers hand records over with [`FileLogger::queue_log`] without ever
/// blocking on disk I/O; one writer task appends them to the file in
/// arrival order, flushing the stream after every record.
pub struct FileLogger {
    context: String,
    level: LogLevel,
    shared: Arc<Shared>,
    sink: Option<Arc<Mutex<Box<dyn LineSink>>>>,
    worker: Option<JoinHandle<()>>,
    lifecycle: Lifecycle,
}

impl FileLogger {
    /// Constructs an idle logger.
    ///
    /// `context` prefixes writer-side diagnostics. Until [`FileLogger::start`]
    /// applies a configured level, every record is accepted, so nothing
    /// queued early is filtered away.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            level: LogLevel::Debug,
            shared: Arc::new(Shared::default()),
            sink: None,
            worker: None,
            lifecycle: Lifecycle::Idle,
        }
    }

    /// Opens the target file and spawns the writer task.
    ///
    /// The parent directory is probed first: an existing directory is used
    /// as-is, a missing one is created and re-probed, anything else fails.
    /// The file itself is opened in append mode and never truncated. On
    /// any failure no task is spawned, no file is left open, and the
    /// logger stays idle so `start` may be retried.
    ///
    /// Starting a logger that is already running, or one that has been
    /// shut down, has no effect.
    pub fn start(&mut self, config: &LogConfig) -> Result<(), StartError> {
        if self.lifecycle != Lifecycle::Idle {
            return Ok(());
        }

        self.level = config.level;

        let dir = fs::parent_directory_of(&config.file);
        ensure_log_directory(dir)?;

        let sink = FileSink::open(&config.file).map_err(|err| StartError::FileOpenFailed {
            path: config.file.clone(),
            source: err,
        })?;

        let sink: Arc<Mutex<Box<dyn LineSink>>> = Arc::new(Mutex::new(Box::new(sink)));
        self.worker = Some(spawn_writer(
            Arc::clone(&self.shared),
            Arc::clone(&sink),
            self.context.clone(),
        ));
        self.sink = Some(sink);
        self.lifecycle = Lifecycle::Running;
        Ok(())
    }

    /// Queues one record.
    ///
    /// Infallible and non-suspending from the caller's point of view, even
    /// before `start` has been called or after it failed; records then
    /// accumulate unconsumed, without a cap, until a writer exists to
    /// drain them. Records below the configured level are dropped.
    pub fn queue_log(
        &self,
        level: LogLevel,
        tag: impl Into<String>,
        timestamp: Timestamp,
        text: impl Into<String>,
    ) {
        if !self.level.enables(level) {
            return;
        }
        self.shared.accepted.fetch_add(1, Ordering::AcqRel);
        self.shared
            .queue
            .add_log(LogMessage::new(level, tag, timestamp, text));
    }

    /// Queues an [`LogLevel::Error`] record stamped with the current time.
    pub fn error(&self, tag: impl Into<String>, text: impl Into<String>) {
        self.queue_log(LogLevel::Error, tag, Utc::now(), text);
    }

    /// Queues a [`LogLevel::Warn`] record stamped with the current time.
    pub fn warn(&self, tag: impl Into<String>, text: impl Into<String>) {
        self.queue_log(LogLevel::Warn, tag, Utc::now(), text);
    }

    /// Queues an [`LogLevel::Info`] record stamped with the current time.
    pub fn info(&self, tag: impl Into<String>, text: impl Into<String>) {
        self.queue_log(LogLevel::Info, tag, Utc::now(), text);
    }

    /// Queues a [`LogLevel::Debug`] record stamped with the current time.
    pub fn debug(&self, tag: impl Into<String>, text: impl Into<String>) {
        self.queue_log(LogLevel::Debug, tag, Utc::now(), text);
    }

    /// Waits until every record queued before this call is on disk.
    ///
    /// No-op unless running. The writer keeps running and remains the only
    /// queue consumer; completion is detected by comparing the written
    /// watermark against a snapshot of the accepted counter.
    pub async fn flush(&self) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        let target = self.shared.accepted.load(Ordering::Acquire);
        loop {
            let notified = self.shared.write_notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.shared.written.load(Ordering::Acquire) >= target {
                return;
            }
            notified.await;
        }
    }

    /// Stops the logger, guaranteeing every queued record reaches disk.
    ///
    /// Terminal and idempotent. The queue's shutdown is signaled first,
    /// the writer task is joined to completion, and only then are records
    /// that slipped in behind the writer's exit drained here, so the file
    /// never has two writers racing. The file handle closes with the sink.
    pub async fn shutdown(&mut self) {
        self.shared.queue.shutdown();

        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }

        if let Some(sink) = self.sink.take() {
            while let Some(message) = self.shared.queue.next_log().await {
                if let Err(err) = write_message(&sink, &message).await {
                    eprintln!("{}: failed to append log record: {err}", self.context);
                }
                self.shared.record_written();
            }
        }

        self.lifecycle = Lifecycle::Stopped;
    }
}

fn spawn_writer(
    shared: Arc<Shared>,
    sink: Arc<Mutex<Box<dyn LineSink>>>,
    context: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(message) = shared.queue.next_log().await {
            if let Err(err) = write_message(&sink, &message).await {
                eprintln!("{context}: failed to append log record: {err}");
            }
            shared.record_written();
        }
    })
}

async fn write_message(
    sink: &Arc<Mutex<Box<dyn LineSink>>>,
    message: &LogMessage,
) -> SinkResult<()> {
    let line = fmt::render_line(message);
    let sink = Arc::clone(sink);
    tokio::task::spawn_blocking(move || {
        let mut sink = sink.blocking_lock();
        sink.append_line(&line)?;
        sink.flush()
    })
    .await
    .map_err(|err| SinkError::Message(format!("join error: {err}")))?
}

fn ensure_log_directory(dir: &Path) -> Result<(), StartError> {
    match fs::probe_directory(dir) {
        Ok(DirState::Directory) => Ok(()),
        Ok(DirState::NotDirectory) => Err(StartError::DirectoryUnavailable {
            dir: dir.to_path_buf(),
            source: None,
        }),
        Ok(DirState::Missing) => {
            if let Err(err) = fs::create_directories(dir) {
                return Err(StartError::DirectoryUnavailable {
                    dir: dir.to_path_buf(),
                    source: Some(err),
                });
            }
            match fs::probe_directory(dir) {
                Ok(DirState::Directory) => Ok(()),
                Ok(_) => Err(StartError::DirectoryUnavailable {
                    dir: dir.to_path_buf(),
                    source: None,
                }),
                Err(err) => Err(StartError::UnknownDirectoryState {
                    dir: dir.to_path_buf(),
                    source: err,
                }),
            }
        }
        Err(err) => Err(StartError::UnknownDirectoryState {
            dir: dir.to_path_buf(),
            source: err,
        }),
    }
}
