//! Error types for archive comparison operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `DiffError`.
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors that can occur while reading and comparing archives.
#[derive(Error, Debug)]
pub enum DiffError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive filename matches no known backend.
    #[error("no archive reader for {path}")]
    UnsupportedFormat {
        /// The path that matched no backend.
        path: PathBuf,
    },

    /// Archive is corrupt, truncated, or unreadable.
    #[error("failed to read archive {path}: {reason}")]
    ArchiveRead {
        /// The archive that failed to read.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Invalid invocation, detected before any I/O.
    #[error("{0}")]
    InvalidArgument(String),
}

impl DiffError {
    /// Returns `true` if this error was raised before any archive was opened.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
