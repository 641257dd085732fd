//! Error types for the library module.

use std::path::PathBuf;
use thiserror::Error;

/// A requested path that cannot be served.
#[derive(Debug, Error)]
pub enum PathError {
    /// Path resolves outside the configured media root.
    #[error("Path escapes the media root: {path}")]
    OutsideRoot { path: PathBuf },

    /// Path contains more parent segments than can be resolved.
    #[error("Invalid path: {path}")]
    Invalid { path: PathBuf },
}

/// Failure to list a directory at the top level of a scan request.
///
/// Per-entry errors during recursive counting are swallowed instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Failure of a bulk analysis run.
///
/// Per-file probe failures never abort a run; they are logged and the file
/// is skipped. Enumeration errors are swallowed by the scanner, so the only
/// way a run ends early is cancellation (explicit, or the progress consumer
/// hanging up).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The run was cancelled between files.
    #[error("Analysis cancelled")]
    Cancelled,
}
