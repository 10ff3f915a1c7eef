//! Tar-family manifest reader.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::Result;
use crate::manifest::Manifest;
use crate::manifest::ManifestEntry;
use crate::manifest::ModificationTime;

use super::read_error;

pub(super) fn read_tar(path: &Path, keep_content: bool) -> Result<Manifest> {
    let reader = open(path)?;
    read_entries(tar::Archive::new(reader), path, keep_content)
}

pub(super) fn read_tar_gz(path: &Path, keep_content: bool) -> Result<Manifest> {
    let reader = open(path)?;
    let decoder = GzDecoder::new(reader);
    read_entries(tar::Archive::new(decoder), path, keep_content)
}

pub(super) fn read_tar_bz2(path: &Path, keep_content: bool) -> Result<Manifest> {
    use bzip2::read::BzDecoder;

    let reader = open(path)?;
    let decoder = BzDecoder::new(reader);
    read_entries(tar::Archive::new(decoder), path, keep_content)
}

pub(super) fn read_tar_xz(path: &Path, keep_content: bool) -> Result<Manifest> {
    use xz2::read::XzDecoder;

    let reader = open(path)?;
    let decoder = XzDecoder::new(reader);
    read_entries(tar::Archive::new(decoder), path, keep_content)
}

pub(super) fn read_tar_zst(path: &Path, keep_content: bool) -> Result<Manifest> {
    use zstd::stream::read::Decoder as ZstdDecoder;

    let reader = open(path)?;
    let decoder =
        ZstdDecoder::new(reader).map_err(|e| read_error(path, format!("zstd stream: {e}")))?;
    read_entries(tar::Archive::new(decoder), path, keep_content)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| read_error(path, e.to_string()))?;
    Ok(BufReader::new(file))
}

fn read_entries<R: Read>(
    mut archive: tar::Archive<R>,
    path: &Path,
    keep_content: bool,
) -> Result<Manifest> {
    let mut manifest = Manifest::new();

    let entries = archive
        .entries()
        .map_err(|e| read_error(path, format!("failed to read tar entries: {e}")))?;

    for entry_result in entries {
        let mut entry =
            entry_result.map_err(|e| read_error(path, format!("failed to read tar entry: {e}")))?;

        let entry_type = entry.header().entry_type();
        if entry_type.is_dir() {
            continue;
        }

        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let size = entry.size();
        let mtime = ModificationTime::Epoch(entry.header().mtime().unwrap_or(0));

        // Only regular files carry content; symlinks, devices, and other
        // special members stay content-less without raising.
        let content = if keep_content && entry_type.is_file() {
            let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
            entry
                .read_to_end(&mut bytes)
                .map_err(|e| read_error(path, format!("failed to read {name}: {e}")))?;
            Some(bytes)
        } else {
            None
        };

        manifest.insert(ManifestEntry {
            name,
            size,
            mtime,
            content,
        });
    }

    Ok(manifest)
}
