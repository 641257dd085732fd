//! Error types for the compat module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the codec-configuration store.
#[derive(Debug, Error)]
pub enum CodecStoreError {
    /// Store file could not be read or written.
    #[error("Failed to access codec config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store contents are not valid JSON for a codec config.
    #[error("Malformed codec config at {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}
