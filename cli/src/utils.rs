use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use proof_cellars_shared::{ContentSnapshot, ContentStore, SiteConfig};

/// Open the store at `content_dir` and load it into a snapshot.
pub fn load_snapshot(content_dir: &Path) -> Result<ContentSnapshot> {
    let store = ContentStore::open(content_dir)
        .with_context(|| format!("failed to open content directory {}", content_dir.display()))?;
    ContentSnapshot::load(&store).context("failed to load content snapshot")
}

/// Site config from the environment with an optional `--base-url` override.
pub fn resolve_site(base_url: Option<&str>) -> SiteConfig {
    let site = SiteConfig::from_env();
    match base_url {
        Some(url) => site.with_base_url(url),
        None => site,
    }
}

/// Parse a `YYYY-MM-DD` date, defaulting to today (UTC).
pub fn parse_date_or_today(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD")),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
