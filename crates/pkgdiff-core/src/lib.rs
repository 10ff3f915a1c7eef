//! Manifest extraction and comparison engine for package archives.
//!
//! `pkgdiff-core` reads tar- and zip-based distribution archives into a
//! uniform manifest model, normalizes entry names by stripping leading
//! path components, and computes the set-theoretic and per-attribute
//! differences between two manifests. An optional content differ renders
//! byte-level diffs of divergent files through an external tool.
//!
//! # Examples
//!
//! ```no_run
//! use pkgdiff_core::read_manifest;
//! use pkgdiff_core::diff_keys;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let left = read_manifest(Path::new("pkg-1.0.tar.gz"), false)?;
//! let right = read_manifest(Path::new("pkg-1.1.tar.gz"), false)?;
//! let diff = diff_keys(&left, &right);
//! println!("{} files only in the first archive", diff.only_in_left.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compare;
pub mod content_diff;
pub mod error;
pub mod formats;
pub mod manifest;

// Re-export main API types
pub use compare::AttrValue;
pub use compare::CompareKey;
pub use compare::KeyDiff;
pub use compare::compare_entries;
pub use compare::diff_keys;
pub use content_diff::DiffRenderer;
pub use content_diff::GitDiffRenderer;
pub use content_diff::show_diff;
pub use error::DiffError;
pub use error::Result;
pub use formats::read_manifest;
pub use manifest::Manifest;
pub use manifest::ManifestEntry;
pub use manifest::ModificationTime;
