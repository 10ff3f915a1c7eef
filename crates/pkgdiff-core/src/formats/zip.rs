//! Zip manifest reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Result;
use crate::manifest::Manifest;
use crate::manifest::ManifestEntry;
use crate::manifest::ModificationTime;

use super::read_error;

/// Timestamp recorded for entries without stored date-time fields.
const ZIP_EPOCH: ModificationTime = ModificationTime::Local {
    year: 1980,
    month: 1,
    day: 1,
    hour: 0,
    minute: 0,
    second: 0,
};

pub(super) fn read_zip(path: &Path, keep_content: bool) -> Result<Manifest> {
    let file = File::open(path).map_err(|e| read_error(path, e.to_string()))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| read_error(path, format!("failed to open zip archive: {e}")))?;

    let mut manifest = Manifest::new();

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| read_error(path, format!("failed to read zip entry: {e}")))?;

        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_owned();
        let size = entry.size();
        let mtime = entry.last_modified().map_or(ZIP_EPOCH, |dt| {
            ModificationTime::Local {
                year: dt.year(),
                month: dt.month(),
                day: dt.day(),
                hour: dt.hour(),
                minute: dt.minute(),
                second: dt.second(),
            }
        });

        // Zip cannot tell regular files apart as cheaply as tar, so
        // content retention is unconditional on `keep_content` alone.
        let content = if keep_content {
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
