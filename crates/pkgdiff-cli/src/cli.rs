//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pkgdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Archive files to compare (exactly two)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Leading path components to strip from entry names before comparing
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub strip: usize,

    /// Also compare modification times
    #[arg(long)]
    pub compare_mtime: bool,

    /// Retain file contents and render an external diff for divergent
    /// common files
    #[arg(long)]
    pub show_diff: bool,
}
