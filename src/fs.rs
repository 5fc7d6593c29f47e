//! Filesystem preflight helpers for the log directory.

use std::io;
use std::path::Path;

/// Tri-state outcome of probing the log directory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// Path exists and is a directory.
    Directory,
    /// Path does not exist.
    Missing,
    /// Path exists but is not a directory.
    NotDirectory,
}

/// Parent directory of `path`, with an empty parent normalized to `"."`.
pub fn parent_directory_of(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Probes `path`. `Err` means the probe itself failed for a reason other
/// than the path being absent (permissions, I/O).
pub fn probe_directory(path: &Path) -> io::Result<DirState> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(DirState::Directory),
        Ok(_) => Ok(DirState::NotDirectory),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DirState::Missing),
        Err(err) => Err(err),
    }
}

/// Creates `path` and any missing ancestors.
pub fn create_directories(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}
