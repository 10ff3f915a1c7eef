//! Orchestrates the two-archive comparison and prints the report.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use pkgdiff_core::AttrValue;
use pkgdiff_core::CompareKey;
use pkgdiff_core::DiffError;
use pkgdiff_core::GitDiffRenderer;
use pkgdiff_core::compare_entries;
use pkgdiff_core::diff_keys;
use pkgdiff_core::read_manifest;
use pkgdiff_core::show_diff;

use crate::cli::Cli;
use crate::error::add_archive_context;

pub fn execute(cli: &Cli) -> Result<()> {
    // Two archives only, checked before any I/O.
    let [left_path, right_path] = cli.files.as_slice() else {
        return Err(DiffError::InvalidArgument(format!(
            "expected exactly 2 archive files, got {}",
            cli.files.len()
        ))
        .into());
    };

    // Content is only materialized when an external diff was requested.
    let keep_content = cli.show_diff;
    let left = add_archive_context(read_manifest(left_path, keep_content), left_path)?;
    let right = add_archive_context(read_manifest(right_path, keep_content), right_path)?;

    let left = left.strip_names(cli.strip);
    let right = right.strip_names(cli.strip);

    let diff = diff_keys(&left, &right);
    print_only_block(&diff.only_in_left, left_path);
    print_only_block(&diff.only_in_right, right_path);

    if diff.common.is_empty() {
        return Ok(());
    }
    println!("# {} common files", diff.common.len());

    let mut keys = BTreeSet::from([CompareKey::Size]);
    if cli.compare_mtime {
        keys.insert(CompareKey::Mtime);
    }

    let renderer = GitDiffRenderer;
    for name in &diff.common {
        let (Some(a), Some(b)) = (left.get(name), right.get(name)) else {
            continue;
        };
        let deltas = compare_entries(a, b, &keys);
        if deltas.is_empty() {
            continue;
        }
        println!("{name} {}", format_deltas(&deltas));

        if cli.show_diff
            && let (Some(left_bytes), Some(right_bytes)) = (&a.content, &b.content)
            && !left_bytes.is_empty()
            && !right_bytes.is_empty()
        {
            show_diff(name, left_bytes, right_bytes, &renderer)
                .map_err(|e| crate::error::convert_diff_error(e, left_path))?;
        }
    }

    Ok(())
}

fn print_only_block(names: &BTreeSet<String>, path: &Path) {
    if names.is_empty() {
        return;
    }
    println!("# {} files only in {}", names.len(), path.display());
    for name in names {
        println!("{name}");
    }
}

/// Renders attribute deltas as `{key: (left, right), ...}`.
fn format_deltas(deltas: &BTreeMap<CompareKey, (AttrValue, AttrValue)>) -> String {
    let parts: Vec<String> = deltas
        .iter()
        .map(|(key, (left, right))| format!("{key}: ({left}, {right})"))
        .collect();
    format!("{{{}}}", parts.join(", "))
}
