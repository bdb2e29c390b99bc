use std::path::Path;

use anyhow::{Context, Result};
use proof_cellars_shared::{ContentStore, Family};

use crate::cli::ListFamily;

/// Identifiers stored for `family`, in store order.
pub fn collect(store: &ContentStore, family: ListFamily) -> Result<Vec<String>> {
    let ids = match family {
        ListFamily::Sell => store.list_slugs(Family::Sell)?,
        ListFamily::Guide => store.list_slugs(Family::Guide)?,
        ListFamily::Faq => store.load_faqs().all().iter().map(|faq| faq.id.clone()).collect(),
    };
    Ok(ids)
}

/// Print one identifier per line.
pub fn run(content_dir: &Path, family: ListFamily) -> Result<()> {
    let store = ContentStore::open(content_dir)
        .with_context(|| format!("failed to open content directory {}", content_dir.display()))?;
    let ids = collect(&store, family)?;
    for id in &ids {
        println!("{id}");
    }
    tracing::debug!("Listed {} entries", ids.len());
    Ok(())
}
