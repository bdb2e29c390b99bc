use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use proof_cellars_shared::{
    render::{
        render_faq_page, render_guide_page, render_guides_index, render_home_page,
        render_not_found, render_sell_index, render_sell_page, render_static_page,
    },
    sitemap::{llms_txt, robots_txt, sitemap_xml},
    ContentSnapshot, Family, SiteConfig, StaticPage,
};

use crate::utils::{load_snapshot, parse_date_or_today, resolve_site, write_file};

/// Counts reported after a build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Sell pages written.
    pub sell_pages: usize,
    /// Guides written.
    pub guides: usize,
    /// Total files written, including indexes, fixed pages and crawl files.
    pub files: usize,
}

/// Render every page of `snapshot` under `out`.
///
/// Pages are written as `<path>/index.html` so the output can be served by
/// any static file server with clean URLs.
pub fn build_site(
    snapshot: &ContentSnapshot,
    site: &SiteConfig,
    out: &Path,
    lastmod: NaiveDate,
) -> Result<BuildSummary> {
    let mut summary = BuildSummary::default();
    let mut emit = |rel: &str, contents: String| -> Result<()> {
        write_file(&out.join(rel), &contents)?;
        summary.files += 1;
        Ok(())
    };

    emit("index.html", render_home_page(site, snapshot.faqs()))?;
    emit("faq/index.html", render_faq_page(site, snapshot.faqs()))?;
    emit("404.html", render_not_found(site))?;
    for page in StaticPage::ALL {
        let rel = format!("{}/index.html", page.path().trim_start_matches('/'));
        emit(&rel, render_static_page(site, page))?;
    }

    emit(&format!("{}/index.html", Family::Sell.dir_name()), render_sell_index(site, snapshot))?;
    for page in snapshot.sell_pages() {
        let rel = format!("{}/{}/index.html", Family::Sell.dir_name(), page.slug);
        emit(&rel, render_sell_page(site, page, snapshot.faqs()))?;
    }

    emit(&format!("{}/index.html", Family::Guide.dir_name()), render_guides_index(site, snapshot))?;
    for guide in snapshot.guides() {
        let rel = format!("{}/{}/index.html", Family::Guide.dir_name(), guide.slug);
        emit(&rel, render_guide_page(site, guide))?;
    }

    emit("sitemap.xml", sitemap_xml(site, snapshot, lastmod))?;
    emit("robots.txt", robots_txt(site))?;
    emit("llms.txt", llms_txt(site, snapshot))?;

    summary.sell_pages = snapshot.sell_pages().len();
    summary.guides = snapshot.guides().len();
    Ok(summary)
}

/// Load the content store and build the site.
pub fn run(content_dir: &Path, out: &Path, base_url: Option<&str>, date: Option<&str>) -> Result<()> {
    let snapshot = load_snapshot(content_dir)?;
    let site = resolve_site(base_url);
    let lastmod = parse_date_or_today(date)?;

    for family in Family::ALL {
        for slug in snapshot.unreadable_slugs(family) {
            tracing::warn!("Skipping unreadable {family} record {slug:?}");
        }
    }

    let summary = build_site(&snapshot, &site, out, lastmod)?;
    tracing::info!(
        "Built {} sell pages and {} guides ({} files) into {}",
        summary.sell_pages,
        summary.guides,
        summary.files,
        out.display()
    );
    Ok(())
}
