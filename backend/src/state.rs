use std::sync::Arc;

use chrono::NaiveDate;
use proof_cellars_shared::{ContentSnapshot, SiteConfig};

/// Shared, read-only request state.
///
/// The snapshot is loaded once at startup; handlers never touch the disk.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<ContentSnapshot>,
    site: Arc<SiteConfig>,
    /// `lastmod` for sitemap entries without a date of their own.
    loaded_on: NaiveDate,
}

impl AppState {
    pub fn new(snapshot: ContentSnapshot, site: SiteConfig) -> Self {
        Self::with_date(snapshot, site, chrono::Utc::now().date_naive())
    }

    pub fn with_date(snapshot: ContentSnapshot, site: SiteConfig, loaded_on: NaiveDate) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            site: Arc::new(site),
            loaded_on,
        }
    }

    pub fn snapshot(&self) -> &ContentSnapshot {
        &self.snapshot
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn loaded_on(&self) -> NaiveDate {
        self.loaded_on
    }
}
