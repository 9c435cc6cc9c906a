//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::output;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List regular files directly inside `dir` (no recursion).
    ///
    /// Symlinks are followed, so a link to a file counts as a file. An entry
    /// whose metadata cannot be resolved (a dangling link, say) is still
    /// returned so that reading it reports the problem for that file alone.
    /// Only a failure to read `dir` itself is an error. Order is unspecified.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// User-facing progress and diagnostics sink.
///
/// Separate from `tracing`: these are the lines a user reads on every run.
pub trait Reporter: Send + Sync {
    /// Progress line (stdout).
    fn status(&self, msg: &str);

    /// Completed step (stdout).
    fn success(&self, msg: &str);

    /// Follow-up suggestion (stdout).
    fn hint(&self, msg: &str);

    /// Non-fatal problem with a single input (stdout).
    fn warning(&self, msg: &str);

    /// Error that does not abort the run (stderr).
    fn error(&self, msg: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        use walkdir::WalkDir;

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(err) if err.depth() > 0 => {
                    debug!("list_files: unresolved entry: {}", err);
                    if let Some(path) = err.path() {
                        files.push(path.to_path_buf());
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(files)
    }
}

/// Real reporter printing colored lines to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn status(&self, msg: &str) {
        output::info(msg);
    }

    fn success(&self, msg: &str) {
        output::success(msg);
    }

    fn hint(&self, msg: &str) {
        output::hint(msg);
    }

    fn warning(&self, msg: &str) {
        output::warning(msg);
    }

    fn error(&self, msg: &str) {
        output::error(msg);
    }
}
