//! Subcommand implementations.

/// `build`: render the full site.
pub mod build;
/// `check`: validate the content store.
pub mod check;
/// `list`: enumerate slugs.
pub mod list;
/// `show`: inspect one record.
pub mod show;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List {
            content_dir,
            family,
        } => list::run(&content_dir, family),
        Commands::Show {
            content_dir,
            family,
            slug,
            base_url,
        } => show::run(&content_dir, family, &slug, base_url.as_deref()),
        Commands::Check {
            content_dir,
            strict,
        } => check::run(&content_dir, strict),
        Commands::Build {
            content_dir,
            out,
            base_url,
            date,
        } => build::run(&content_dir, &out, base_url.as_deref(), date.as_deref()),
    }
}
