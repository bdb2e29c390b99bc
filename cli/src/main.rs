//! `pc-cli` entry point.

use anyhow::Result;
use clap::Parser;
use pc_cli::{cli, commands};
use proof_cellars_shared::logging::init_tracing;

fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    init_tracing();

    let cli = cli::Cli::parse();
    commands::run(cli)
}
