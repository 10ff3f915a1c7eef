//! Pkgdiff CLI - Command-line utility for comparing the contents of two
//! package archives.

mod cli;
mod error;
mod run;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    run::execute(&cli)
}
