//! Error conversion utilities for CLI.
//!
//! Converts pkgdiff-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use pkgdiff_core::DiffError;
use std::path::Path;

/// Converts `DiffError` to a user-friendly anyhow error with context
pub fn convert_diff_error(err: DiffError, archive: &Path) -> anyhow::Error {
    match err {
        DiffError::UnsupportedFormat { path } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported names: *.tar.gz, *.tar.bz2, *.tar.xz, *.tar.zst, *.tgz, *.zip, *.whl",
                path.display()
            )
        }
        DiffError::ArchiveRead { path, reason } => {
            anyhow!(
                "Failed to read archive '{}': {reason}\n\
                 HINT: The archive may be corrupted or truncated.",
                path.display()
            )
        }
        DiffError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {io_err}",
                archive.display()
            )
        }
        other => anyhow::Error::from(other)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds archive context to a core result
pub fn add_archive_context<T>(
    result: pkgdiff_core::Result<T>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_diff_error(e, archive))
}
