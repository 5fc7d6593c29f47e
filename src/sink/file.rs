//! Append-only text file sink.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{LineSink, SinkResult};

/// [`LineSink`] backed by an append-mode file.
///
/// The file is opened once, created if absent and never truncated, so an
/// existing log grows across process restarts.
pub struct FileSink {
    out: BufWriter<File>,
}

impl FileSink {
    /// Opens (or creates) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }
}

impl LineSink for FileSink {
    fn append_line(&mut self, line: &str) -> SinkResult<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
