use std::path::Path;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use linelog::{
    logger::{FileLogger, LogConfig, StartError},
    types::{LogLevel, Timestamp},
};

fn stamp() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

fn config(file: &Path) -> LogConfig {
    LogConfig {
        level: LogLevel::Info,
        file: file.to_path_buf(),
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn start_creates_a_missing_log_directory() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("logs").join("nested").join("app.log");

    let mut logger = FileLogger::new("file-logger");
    logger.start(&config(&path)).expect("start");
    logger.queue_log(LogLevel::Info, "fs", stamp(), "created");
    logger.shutdown().await;

    assert!(path.parent().expect("parent").is_dir());
    assert_eq!(read_lines(&path).len(), 1);
}

#[tokio::test]
async fn second_start_on_an_existing_directory_appends() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("logs").join("app.log");

    let mut first = FileLogger::new("file-logger");
    first.start(&config(&path)).expect("first start");
    first.queue_log(LogLevel::Info, "fs", stamp(), "one");
    first.shutdown().await;

    let mut second = FileLogger::new("file-logger");
    second.start(&config(&path)).expect("second start");
    second.queue_log(LogLevel::Info, "fs", stamp(), "two");
    second.shutdown().await;

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("{fs}: one"));
    assert!(lines[1].ends_with("{fs}: two"));
}

#[tokio::test]
async fn start_fails_when_the_parent_path_is_a_plain_file() {
    let tmp = TempDir::new().expect("tmp");
    let bogus = tmp.path().join("logs");
    std::fs::write(&bogus, b"not a directory").expect("write conflict file");
    let path = bogus.join("app.log");

    let mut logger = FileLogger::new("file-logger");
    let err = logger.start(&config(&path)).expect_err("start must fail");
    assert!(
        matches!(err, StartError::DirectoryUnavailable { .. }),
        "unexpected error: {err}"
    );
    assert!(!path.exists());

    // Queueing and shutting down stay safe; nothing is ever written.
    logger.queue_log(LogLevel::Info, "fs", stamp(), "never");
    logger.shutdown().await;
    assert!(!path.exists());
}

#[tokio::test]
async fn start_can_be_retried_after_a_failure() {
    let tmp = TempDir::new().expect("tmp");
    let bogus = tmp.path().join("logs");
    std::fs::write(&bogus, b"not a directory").expect("write conflict file");
    let path = bogus.join("app.log");

    let mut logger = FileLogger::new("file-logger");
    assert!(logger.start(&config(&path)).is_err());

    std::fs::remove_file(&bogus).expect("remove conflict file");
    logger.start(&config(&path)).expect("retried start");
    logger.queue_log(LogLevel::Info, "fs", stamp(), "recovered");
    logger.shutdown().await;

    assert_eq!(read_lines(&path).len(), 1);
}

#[tokio::test]
async fn starting_twice_keeps_a_single_writer() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.log");

    let mut logger = FileLogger::new("file-logger");
    logger.start(&config(&path)).expect("start");
    logger.start(&config(&path)).expect("second start is a no-op");

    logger.queue_log(LogLevel::Info, "fs", stamp(), "once");
    logger.shutdown().await;

    assert_eq!(read_lines(&path).len(), 1);
}
