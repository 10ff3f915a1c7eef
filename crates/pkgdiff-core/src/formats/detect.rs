//! Archive format detection.

use std::path::Path;

use crate::DiffError;
use crate::Result;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    /// Tar archive with no recognized compression suffix.
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Bzip2-compressed tar archive.
    TarBz2,
    /// XZ-compressed tar archive.
    TarXz,
    /// Zstd-compressed tar archive.
    TarZst,
    /// ZIP archive (including wheels).
    Zip,
}

/// Detects the archive type from a file path.
///
/// Dispatch rule: a filename containing `.tar.` or ending in `.tgz`
/// selects the tar backend; an extension of `.zip` or `.whl` selects the
/// zip backend (a wheel is a zip container). Anything else is
/// unsupported. Matching is case-insensitive.
///
/// # Errors
///
/// Returns [`DiffError::UnsupportedFormat`] when no backend matches.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DiffError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
    let lower = name.to_ascii_lowercase();

    if lower.contains(".tar.") || lower.ends_with(".tgz") {
        if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Ok(ArchiveType::TarGz)
        } else if lower.ends_with(".tar.bz2") {
            Ok(ArchiveType::TarBz2)
        } else if lower.ends_with(".tar.xz") {
            Ok(ArchiveType::TarXz)
        } else if lower.ends_with(".tar.zst") {
            Ok(ArchiveType::TarZst)
        } else {
            // Unknown suffix after `.tar.`; attempt an uncompressed read
            // and let the reader surface the failure if it is wrong.
            Ok(ArchiveType::Tar)
        }
    } else if lower.ends_with(".zip") || lower.ends_with(".whl") {
        Ok(ArchiveType::Zip)
    } else {
        Err(DiffError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_tar_gz() {
        let path = PathBuf::from("pkg-1.0.tar.gz");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::TarGz);

        let path2 = PathBuf::from("pkg-1.0.tgz");
        assert_eq!(detect_format(&path2).unwrap(), ArchiveType::TarGz);
    }

    #[test]
    fn test_detect_tar_bz2() {
        let path = PathBuf::from("pkg-1.0.tar.bz2");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::TarBz2);
    }

    #[test]
    fn test_detect_tar_xz() {
        let path = PathBuf::from("pkg-1.0.tar.xz");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::TarXz);
    }

    #[test]
    fn test_detect_tar_zst() {
        let path = PathBuf::from("pkg-1.0.tar.zst");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::TarZst);
    }

    #[test]
    fn test_detect_zip() {
        let path = PathBuf::from("pkg-1.0.zip");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::Zip);
    }

    #[test]
    fn test_detect_wheel_is_zip() {
        let path = PathBuf::from("pkg-1.0-py3-none-any.whl");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::Zip);
    }

    #[test]
    fn test_detect_case_insensitive() {
        let path = PathBuf::from("PKG-1.0.TAR.GZ");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::TarGz);

        let path2 = PathBuf::from("Pkg-1.0.ZIP");
        assert_eq!(detect_format(&path2).unwrap(), ArchiveType::Zip);
    }

    #[test]
    fn test_detect_bare_tar_is_unsupported() {
        // `pkg.tar` contains no `.tar.` and does not end in `.tgz`, so
        // the dispatch rule rejects it.
        let path = PathBuf::from("pkg-1.0.tar");
        assert!(matches!(
            detect_format(&path),
            Err(DiffError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_detect_unknown_tar_suffix_falls_back_to_plain() {
        let path = PathBuf::from("pkg-1.0.tar.lz4");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::Tar);
    }

    #[test]
    fn test_detect_unsupported() {
        let path = PathBuf::from("pkg-1.0.rar");
        assert!(matches!(
            detect_format(&path),
            Err(DiffError::UnsupportedFormat { .. })
        ));
    }
}
