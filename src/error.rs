//! Error types for medalist-extract.
//!
//! Only I/O and serialisation failures are errors. Pages without a finals
//! table and malformed rows are skipped, not reported here.

use std::path::PathBuf;

/// Error type for extraction runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading an input document or writing the output artifact failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File or directory the operation was working on.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialised as JSON.
    #[error("JSON serialisation failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
