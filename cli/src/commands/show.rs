use std::path::Path;

use anyhow::{Context, Result};
use proof_cellars_shared::{
    related::related_links,
    structured_data::{article_schema, breadcrumb_schema, faq_schema},
    ContentStore, Family, Guide, SellPage, SiteConfig,
};
use serde_json::{json, Value};

use crate::{cli::RecordFamily, utils::resolve_site};

/// Record plus everything derived from it, as one JSON document.
///
/// Returns `None` when the slug does not resolve.
pub fn describe(store: &ContentStore, site: &SiteConfig, family: Family, slug: &str) -> Option<Value> {
    match family {
        Family::Sell => {
            let page: SellPage = store.get_record(slug)?;
            Some(json!({
                "family": family.dir_name(),
                "url": site.url(&family.record_path(&page.slug)),
                "bucket": page.category_type.bucket().key(),
                "relatedLinks": related_links(&page),
                "structuredData": [breadcrumb_schema(site, &page), faq_schema(&page.faqs)],
                "record": page,
            }))
        },
        Family::Guide => {
            let guide: Guide = store.get_record(slug)?;
            Some(json!({
                "family": family.dir_name(),
                "url": site.url(&family.record_path(&guide.slug)),
                "relatedLinks": guide.related_links,
                "structuredData": [article_schema(site, &guide), faq_schema(&guide.faqs)],
                "record": guide,
            }))
        },
    }
}

/// Print [`describe`] output as pretty JSON.
pub fn run(content_dir: &Path, family: RecordFamily, slug: &str, base_url: Option<&str>) -> Result<()> {
    let store = ContentStore::open(content_dir)
        .with_context(|| format!("failed to open content directory {}", content_dir.display()))?;
    let site = resolve_site(base_url);
    let family = Family::from(family);

    let Some(value) = describe(&store, &site, family, slug) else {
        anyhow::bail!("no {family} record found for slug {slug:?}");
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
