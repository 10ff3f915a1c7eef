//! Uniform manifest model shared by the tar and zip backends.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Path separator used by archive entry names.
///
/// Both tar and zip store `/`-separated names regardless of the host
/// platform, so normalization splits on `/` rather than the OS separator.
pub const NAME_SEPARATOR: char = '/';

/// A file modification timestamp, tagged by its source representation.
///
/// Tar headers store seconds since the Unix epoch; zip headers store six
/// local date-time fields with no timezone. The two representations are
/// kept distinct and compared with derived equality only, so comparing a
/// tar-derived entry against a zip-derived entry always reports the
/// timestamps as different. That mirrors the stored data faithfully; it
/// is a known limitation, not something this crate papers over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationTime {
    /// Seconds since the Unix epoch (tar).
    Epoch(u64),
    /// Timezone-less local date-time fields (zip).
    Local {
        /// Full year.
        year: u16,
        /// Month, 1-12.
        month: u8,
        /// Day of month, 1-31.
        day: u8,
        /// Hour, 0-23.
        hour: u8,
        /// Minute, 0-59.
        minute: u8,
        /// Second, 0-60.
        second: u8,
    },
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epoch(secs) => write!(f, "{secs}"),
            Self::Local {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => write!(
                f,
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ),
        }
    }
}

/// One file inside an archive.
///
/// Constructed once by a format backend and never mutated afterwards,
/// except for the key rewrite performed by [`Manifest::strip_names`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Normalized entry path; always equal to the manifest key.
    pub name: String,
    /// Byte length as recorded in the archive metadata.
    pub size: u64,
    /// Timestamp in the source format's representation.
    pub mtime: ModificationTime,
    /// Full file bytes, populated only when content retention was
    /// requested. Never partially read.
    pub content: Option<Vec<u8>>,
}

/// Mapping from normalized path name to [`ManifestEntry`].
///
/// Keys are unique; if an archive contains duplicate paths the last one
/// read wins, matching how the underlying archive readers expose entries.
/// Directory entries are never stored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry under its own name, replacing any previous entry
    /// with the same name.
    pub fn insert(&mut self, entry: ManifestEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Looks up an entry by normalized name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the manifest holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entry names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, entry)` pairs in lexicographic name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ManifestEntry> {
        self.entries.iter()
    }

    /// Rebuilds the manifest with the first `strip` leading path
    /// components dropped from every name.
    ///
    /// Names with `strip` or fewer components are left unchanged, so a
    /// key is never stripped down to nothing. If two distinct names
    /// normalize to the same key, the later one in iteration order
    /// silently overwrites the earlier; that collision is accepted, not
    /// an error.
    #[must_use]
    pub fn strip_names(self, strip: usize) -> Self {
        let mut stripped = Self::new();
        for (name, mut entry) in self.entries {
            entry.name = strip_components(&name, strip);
            stripped.insert(entry);
        }
        stripped
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a String, &'a ManifestEntry);
    type IntoIter = btree_map::Iter<'a, String, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Drops the first `strip` components of a `/`-separated name, unless
/// doing so would consume the whole name.
fn strip_components(name: &str, strip: usize) -> String {
    if strip == 0 {
        return name.to_owned();
    }
    let components: Vec<&str> = name.split(NAME_SEPARATOR).collect();
    if components.len() > strip {
        components[strip..].join("/")
    } else {
        name.to_owned()
    }
}
