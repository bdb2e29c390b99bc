//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use proof_cellars_shared::Family;

/// Content family selector for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFamily {
    /// Sell pages.
    Sell,
    /// Guides.
    Guide,
    /// Global FAQ ids.
    Faq,
}

/// Record family selector for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFamily {
    /// Sell pages.
    Sell,
    /// Guides.
    Guide,
}

impl From<RecordFamily> for Family {
    fn from(value: RecordFamily) -> Self {
        match value {
            RecordFamily::Sell => Family::Sell,
            RecordFamily::Guide => Family::Guide,
        }
    }
}

/// Top-level parser.
#[derive(Parser)]
#[command(name = "pc-cli", version, about = "Proof Cellars content CLI")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print every slug (or FAQ id) stored for a family.
    List {
        /// Content directory path.
        #[arg(long, default_value = "./content")]
        content_dir: PathBuf,
        /// Family to enumerate.
        #[arg(long, value_enum, ignore_case = true)]
        family: ListFamily,
    },
    /// Print one record with its related links and JSON-LD.
    Show {
        /// Content directory path.
        #[arg(long, default_value = "./content")]
        content_dir: PathBuf,
        /// Family of the record.
        #[arg(long, value_enum, ignore_case = true)]
        family: RecordFamily,
        /// Record slug.
        #[arg(long)]
        slug: String,
        /// Public origin used in URLs (defaults to `SITE_BASE_URL`).
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate the content store.
    Check {
        /// Content directory path.
        #[arg(long, default_value = "./content")]
        content_dir: PathBuf,
        /// Treat warnings as failures.
        #[arg(long)]
        strict: bool,
    },
    /// Render the whole site into a directory.
    Build {
        /// Content directory path.
        #[arg(long, default_value = "./content")]
        content_dir: PathBuf,
        /// Output directory.
        #[arg(long, default_value = "./dist")]
        out: PathBuf,
        /// Public origin used in URLs (defaults to `SITE_BASE_URL`).
        #[arg(long)]
        base_url: Option<String>,
        /// `lastmod` date for sitemap entries in `YYYY-MM-DD` format
        /// (defaults to today).
        #[arg(long)]
        date: Option<String>,
    },
}
