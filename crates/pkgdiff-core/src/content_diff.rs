//! External content diff for divergent common files.
//!
//! The rendering step is a capability: callers hand [`show_diff`] any
//! [`DiffRenderer`], and the production [`GitDiffRenderer`] shells out to
//! `git diff --no-index`. Blobs are staged in scoped temporary files that
//! keep the original name's extension, so extension-based heuristics in
//! the external tool still apply.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

use crate::Result;

/// Renders a diff of two on-disk files.
pub trait DiffRenderer {
    /// Renders the diff of `left` against `right`, streaming output to
    /// the console.
    ///
    /// # Errors
    ///
    /// Returns an error when the renderer cannot be invoked or fails.
    fn render(&self, left: &Path, right: &Path) -> Result<()>;
}

/// Renderer backed by `git diff --no-index`.
///
/// Requires `git` on the host; a missing binary surfaces as the spawn
/// failure, it is not caught here.
pub struct GitDiffRenderer;

impl DiffRenderer for GitDiffRenderer {
    fn render(&self, left: &Path, right: &Path) -> Result<()> {
        let status = Command::new("git")
            .args(["diff", "--no-index", "--"])
            .arg(left)
            .arg(right)
            .status()
            .map_err(crate::DiffError::Io)?;

        // git diff --no-index exits 1 when the files differ.
        match status.code() {
            Some(0 | 1) => Ok(()),
            _ => Err(std::io::Error::other(format!("git diff failed: {status}")).into()),
        }
    }
}

/// Writes both blobs to temporary files and renders their diff.
///
/// The temporary files preserve `name`'s extension and are deleted on
/// every exit path, including renderer failure.
///
/// # Errors
///
/// Returns an error when a temporary file cannot be created or written,
/// or when the renderer fails.
pub fn show_diff(
    name: &str,
    left: &[u8],
    right: &[u8],
    renderer: &dyn DiffRenderer,
) -> Result<()> {
    let left_file = scratch_file(name, left)?;
    let right_file = scratch_file(name, right)?;
    renderer.render(left_file.path(), right_file.path())
    // Both NamedTempFiles drop here, removing the files.
}

fn scratch_file(name: &str, bytes: &[u8]) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("pkgdiff-");
    let suffix = Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()));
    if let Some(suffix) = &suffix {
        builder.suffix(suffix.as_str());
    }

    let mut file = builder.tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}
