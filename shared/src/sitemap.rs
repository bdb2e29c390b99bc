//! Crawl surfaces: `sitemap.xml`, `robots.txt` and `llms.txt`.

use chrono::NaiveDate;

use crate::{
    model::Family, pages::StaticPage, render::html_escape, site::SiteConfig,
    snapshot::ContentSnapshot,
};

struct PrimaryPage {
    path: &'static str,
    label: &'static str,
    changefreq: &'static str,
    priority: &'static str,
}

const PRIMARY_PAGES: &[PrimaryPage] = &[
    PrimaryPage {
        path: "/",
        label: "Homepage",
        changefreq: "weekly",
        priority: "1.0",
    },
    PrimaryPage {
        path: StaticPage::GetOffer.path(),
        label: "Submit bottles for a quote",
        changefreq: "monthly",
        priority: "0.9",
    },
    PrimaryPage {
        path: "/sell",
        label: "What we buy (overview)",
        changefreq: "weekly",
        priority: "0.9",
    },
    PrimaryPage {
        path: "/guides",
        label: "Guides hub",
        changefreq: "weekly",
        priority: "0.8",
    },
    PrimaryPage {
        path: "/faq",
        label: "Frequently asked questions",
        changefreq: "monthly",
        priority: "0.7",
    },
    PrimaryPage {
        path: StaticPage::Contact.path(),
        label: "Contact information",
        changefreq: "monthly",
        priority: "0.7",
    },
];

fn url_entry(loc: &str, lastmod: &str, changefreq: &str, priority: &str) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
         <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
        html_escape(loc),
        html_escape(lastmod),
        changefreq,
        priority,
    )
}

/// Sitemap covering the primary pages and every listed sell and guide slug
/// that resolves to a record.
///
/// Guides use their publication date as `lastmod` when it parses; all other
/// entries use `lastmod`.
pub fn sitemap_xml(site: &SiteConfig, snapshot: &ContentSnapshot, lastmod: NaiveDate) -> String {
    let today = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    for page in PRIMARY_PAGES {
        xml.push_str(&url_entry(&site.url(page.path), &today, page.changefreq, page.priority));
    }

    for slug in snapshot
        .list_slugs(Family::Sell)
        .iter()
        .filter(|slug| snapshot.get_sell(slug).is_some())
    {
        let loc = site.url(&Family::Sell.record_path(slug));
        xml.push_str(&url_entry(&loc, &today, "monthly", "0.8"));
    }

    for slug in snapshot.list_slugs(Family::Guide) {
        let Some(guide) = snapshot.get_guide(slug) else {
            continue;
        };
        let loc = site.url(&Family::Guide.record_path(slug));
        let published = NaiveDate::parse_from_str(guide.published_date.trim(), "%Y-%m-%d")
            .ok()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| today.clone());
        xml.push_str(&url_entry(&loc, &published, "monthly", "0.7"));
    }

    xml.push_str("</urlset>\n");
    xml
}

/// `robots.txt` allowing everything and pointing at the sitemap.
pub fn robots_txt(site: &SiteConfig) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}\n", site.url("/sitemap.xml"))
}

/// Plain-text site summary for LLM crawlers, generated from the snapshot.
pub fn llms_txt(site: &SiteConfig, snapshot: &ContentSnapshot) -> String {
    let mut out = format!(
        "# {name} - LLM Context\n\n## About\n{name} is a direct buyer of collectible wine and \
         spirits. We purchase bottles from individuals, estates, and collections without \
         consignment fees.\n\n## Primary Pages\n",
        name = site.site_name
    );
    for page in PRIMARY_PAGES {
        out.push_str(&format!("{} - {}\n", site.url(page.path), page.label));
    }

    out.push_str("\n## Sell Pages\n");
    for page in snapshot.sell_pages() {
        out.push_str(&format!(
            "{} - {}\n",
            site.url(&Family::Sell.record_path(&page.slug)),
            page.title
        ));
    }

    out.push_str("\n## Guides\n");
    for guide in snapshot.guides() {
        out.push_str(&format!(
            "{} - {}\n",
            site.url(&Family::Guide.record_path(&guide.slug)),
            guide.title
        ));
    }

    out.push_str(&format!(
        "\n## Contact\nPhone: {phone}\nText: {phone}\nEmail: {email}\n\n## Process Summary\n\
         1. Submit photos and bottle list via form or text\n\
         2. Receive offer within one business day\n\
         3. Ship bottles (prepaid label provided) or arrange pickup\n\
         4. Receive payment after inspection\n",
        phone = site.phone_display,
        email = site.email,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        faq::FaqList,
        model::{Guide, SellPage},
    };

    fn snapshot() -> ContentSnapshot {
        ContentSnapshot::from_records(
            vec![
                SellPage {
                    slug: "macallan".to_string(),
                    title: "Sell Macallan".to_string(),
                    ..SellPage::default()
                },
                SellPage {
                    slug: "petrus".to_string(),
                    title: "Sell Petrus".to_string(),
                    ..SellPage::default()
                },
            ],
            vec![Guide {
                slug: "inherited-cellar".to_string(),
                title: "Inherited Cellar".to_string(),
                published_date: "2025-01-15".to_string(),
                ..Guide::default()
            }],
            FaqList::default(),
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    }

    #[test]
    fn sitemap_lists_every_slug() {
        let xml = sitemap_xml(&SiteConfig::default(), &snapshot(), day());
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://proofcellars.com</loc>"));
        assert!(xml.contains("<loc>https://proofcellars.com/sell/macallan</loc>"));
        assert!(xml.contains("<loc>https://proofcellars.com/sell/petrus</loc>"));
        assert!(xml.contains("<loc>https://proofcellars.com/guides/inherited-cellar</loc>"));
        assert_eq!(xml.matches("<url>").count(), PRIMARY_PAGES.len() + 3);
    }

    #[test]
    fn primary_pages_are_served_pages() {
        let served = ["/", "/sell", "/guides", "/faq"];
        for page in PRIMARY_PAGES {
            assert!(
                served.contains(&page.path) || StaticPage::ALL.iter().any(|p| p.path() == page.path),
                "{} is not served",
                page.path
            );
        }
    }

    #[test]
    fn guide_lastmod_uses_published_date() {
        let xml = sitemap_xml(&SiteConfig::default(), &snapshot(), day());
        assert!(xml.contains("<lastmod>2025-01-15</lastmod>"));
        assert!(xml.contains("<lastmod>2026-03-01</lastmod>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let site = SiteConfig::default().with_base_url("https://example.test/");
        assert_eq!(
            robots_txt(&site),
            "User-agent: *\nAllow: /\n\nSitemap: https://example.test/sitemap.xml\n"
        );
    }

    #[test]
    fn llms_txt_lists_snapshot_pages() {
        let text = llms_txt(&SiteConfig::default(), &snapshot());
        assert!(text.contains("https://proofcellars.com/sell/macallan - Sell Macallan"));
        assert!(text.contains("https://proofcellars.com/guides/inherited-cellar - Inherited Cellar"));
        assert!(text.starts_with("# Proof Cellars - LLM Context"));
    }
}
