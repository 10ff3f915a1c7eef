//! Archive format backends.
//!
//! Two backends sit behind [`read_manifest`]: one for the tar family
//! (with gzip, bzip2, xz, and zstd codecs) and one for zip containers.
//! Dispatch is a fixed filename-pattern branch, see [`detect`].

pub mod detect;
mod tar;
mod zip;

use std::path::Path;

use crate::DiffError;
use crate::Result;
use crate::manifest::Manifest;

use detect::ArchiveType;
use detect::detect_format;

/// Reads an archive into a manifest in a single pass.
///
/// The archive handle is opened and fully closed within this call, even
/// when reading fails partway through. Directory entries are skipped.
/// With `keep_content` set, the full decompressed bytes of every regular
/// file are retained in memory; note that this materializes the whole
/// archive at once.
///
/// # Errors
///
/// Returns [`DiffError::UnsupportedFormat`] when the filename matches no
/// backend and [`DiffError::ArchiveRead`] when the archive is corrupt,
/// truncated, or unreadable.
pub fn read_manifest<P: AsRef<Path>>(path: P, keep_content: bool) -> Result<Manifest> {
    let path = path.as_ref();
    let format = detect_format(path)?;

    match format {
        ArchiveType::Tar => tar::read_tar(path, keep_content),
        ArchiveType::TarGz => tar::read_tar_gz(path, keep_content),
        ArchiveType::TarBz2 => tar::read_tar_bz2(path, keep_content),
        ArchiveType::TarXz => tar::read_tar_xz(path, keep_content),
        ArchiveType::TarZst => tar::read_tar_zst(path, keep_content),
        ArchiveType::Zip => zip::read_zip(path, keep_content),
    }
}

/// Maps a backend failure onto [`DiffError::ArchiveRead`].
fn read_error(path: &Path, reason: String) -> DiffError {
    DiffError::ArchiveRead {
        path: path.to_path_buf(),
        reason,
    }
}
