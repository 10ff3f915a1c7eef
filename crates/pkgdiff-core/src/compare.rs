//! Set-difference and per-entry attribute comparison over manifests.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use crate::manifest::Manifest;
use crate::manifest::ManifestEntry;
use crate::manifest::ModificationTime;

/// An entry attribute selectable for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CompareKey {
    /// Recorded byte length. Always compared.
    Size,
    /// Modification time. Compared only on request.
    Mtime,
}

impl fmt::Display for CompareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size => f.write_str("size"),
            Self::Mtime => f.write_str("mtime"),
        }
    }
}

/// The value of a compared attribute on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue {
    /// A byte length.
    Size(u64),
    /// A modification time.
    Mtime(ModificationTime),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(size) => write!(f, "{size}"),
            Self::Mtime(mtime) => write!(f, "{mtime}"),
        }
    }
}

/// Partition of two manifests' key sets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyDiff {
    /// Names present only in the left manifest.
    pub only_in_left: BTreeSet<String>,
    /// Names present only in the right manifest.
    pub only_in_right: BTreeSet<String>,
    /// Names present in both manifests.
    pub common: BTreeSet<String>,
}

/// Partitions the key sets of two manifests.
///
/// Pure set algebra: `only_in_left = keys(a) − keys(b)`,
/// `only_in_right = keys(b) − keys(a)`, `common = keys(a) ∩ keys(b)`.
/// The returned sets iterate lexicographically.
#[must_use]
pub fn diff_keys(a: &Manifest, b: &Manifest) -> KeyDiff {
    let keys_a: BTreeSet<String> = a.names().map(str::to_owned).collect();
    let keys_b: BTreeSet<String> = b.names().map(str::to_owned).collect();

    KeyDiff {
        only_in_left: keys_a.difference(&keys_b).cloned().collect(),
        only_in_right: keys_b.difference(&keys_a).cloned().collect(),
        common: keys_a.intersection(&keys_b).cloned().collect(),
    }
}

/// Compares the requested attributes of two entries.
///
/// Each requested key whose values differ is recorded with the
/// `(left, right)` pair; an empty map means no requested attribute
/// differs. Equality is syntactic only: timestamps are not normalized
/// across formats, so a tar entry and a zip entry always report an mtime
/// delta (see [`ModificationTime`]).
#[must_use]
pub fn compare_entries(
    a: &ManifestEntry,
    b: &ManifestEntry,
    keys: &BTreeSet<CompareKey>,
) -> BTreeMap<CompareKey, (AttrValue, AttrValue)> {
    let mut deltas = BTreeMap::new();
    for key in keys {
        let (va, vb) = match key {
            CompareKey::Size => (AttrValue::Size(a.size), AttrValue::Size(b.size)),
            CompareKey::Mtime => (AttrValue::Mtime(a.mtime), AttrValue::Mtime(b.mtime)),
        };
        if va != vb {
            deltas.insert(*key, (va, vb));
        }
    }
    deltas
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(name: &str, size: u64, mtime: ModificationTime) -> ManifestEntry {
        ManifestEntry {
            name: name.to_owned(),
            size,
            mtime,
            content: None,
        }
    }

    fn manifest(names: &[&str]) -> Manifest {
        let mut m = Manifest::new();
        for name in names {
            m.insert(entry(name, 0, ModificationTime::Epoch(0)));
        }
        m
    }

    fn size_key() -> BTreeSet<CompareKey> {
        BTreeSet::from([CompareKey::Size])
    }

    fn both_keys() -> BTreeSet<CompareKey> {
        BTreeSet::from([CompareKey::Size, CompareKey::Mtime])
    }

    #[test]
    fn test_diff_keys_partition() {
        let a = manifest(&["lib/x.txt", "lib/z.txt"]);
        let b = manifest(&["lib/x.txt", "lib/y.txt"]);
        let diff = diff_keys(&a, &b);

        assert_eq!(
            diff.only_in_left,
            BTreeSet::from(["lib/z.txt".to_owned()])
        );
        assert_eq!(
            diff.only_in_right,
            BTreeSet::from(["lib/y.txt".to_owned()])
        );
        assert_eq!(diff.common, BTreeSet::from(["lib/x.txt".to_owned()]));
    }

    #[test]
    fn test_diff_keys_empty_manifests() {
        let diff = diff_keys(&Manifest::new(), &Manifest::new());
        assert!(diff.only_in_left.is_empty());
        assert!(diff.only_in_right.is_empty());
        assert!(diff.common.is_empty());
    }

    #[test]
    fn test_compare_equal_entries_is_empty() {
        let a = entry("x", 10, ModificationTime::Epoch(100));
        let b = entry("x", 10, ModificationTime::Epoch(100));
        assert!(compare_entries(&a, &b, &both_keys()).is_empty());
    }

    #[test]
    fn test_compare_size_delta() {
        let a = entry("x", 10, ModificationTime::Epoch(100));
        let b = entry("x", 12, ModificationTime::Epoch(100));
        let deltas = compare_entries(&a, &b, &size_key());
        assert_eq!(
            deltas.get(&CompareKey::Size),
            Some(&(AttrValue::Size(10), AttrValue::Size(12)))
        );
        assert_eq!(deltas.len(), 1);
    }

    #[test]
    fn test_compare_mtime_only_when_requested() {
        let a = entry("x", 10, ModificationTime::Epoch(100));
        let b = entry("x", 10, ModificationTime::Epoch(200));
        assert!(compare_entries(&a, &b, &size_key()).is_empty());

        let deltas = compare_entries(&a, &b, &both_keys());
        assert_eq!(deltas.len(), 1);
        assert!(deltas.contains_key(&CompareKey::Mtime));
    }

    #[test]
    fn test_compare_cross_format_mtime_reports_delta() {
        let a = entry("x", 10, ModificationTime::Epoch(0));
        let b = entry(
            "x",
            10,
            ModificationTime::Local {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            },
        );
        let deltas = compare_entries(&a, &b, &both_keys());
        assert!(deltas.contains_key(&CompareKey::Mtime));
    }

    #[test]
    fn test_size_orders_before_mtime() {
        let a = entry("x", 10, ModificationTime::Epoch(100));
        let b = entry("x", 12, ModificationTime::Epoch(200));
        let deltas = compare_entries(&a, &b, &both_keys());
        let order: Vec<CompareKey> = deltas.keys().copied().collect();
        assert_eq!(order, vec![CompareKey::Size, CompareKey::Mtime]);
    }

    proptest! {
        #[test]
        fn prop_diff_keys_is_a_partition(
            names_a in prop::collection::btree_set("[a-d]{1,4}", 0..16),
            names_b in prop::collection::btree_set("[a-d]{1,4}", 0..16),
        ) {
            let a = {
                let mut m = Manifest::new();
                for n in &names_a {
                    m.insert(entry(n, 0, ModificationTime::Epoch(0)));
                }
                m
            };
            let b = {
                let mut m = Manifest::new();
                for n in &names_b {
                    m.insert(entry(n, 0, ModificationTime::Epoch(0)));
                }
                m
            };
            let diff = diff_keys(&a, &b);

            prop_assert!(diff.only_in_left.is_disjoint(&diff.only_in_right));
            prop_assert!(diff.only_in_left.is_disjoint(&diff.common));
            prop_assert!(diff.only_in_right.is_disjoint(&diff.common));

            let union: BTreeSet<String> = diff
                .only_in_left
                .iter()
                .chain(&diff.only_in_right)
                .chain(&diff.common)
                .cloned()
                .collect();
            let expected: BTreeSet<String> = names_a.union(&names_b).cloned().collect();
            prop_assert_eq!(union, expected);

            let intersection: BTreeSet<String> =
                names_a.intersection(&names_b).cloned().collect();
            prop_assert_eq!(diff.common, intersection);
        }
    }
}
