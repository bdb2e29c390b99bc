//! JSON-LD objects derived from content records.
//!
//! Everything here is a pure field mapping: the same record always produces
//! the same value, and nothing is validated. Guide pages carry an inline
//! HTML breadcrumb only, so there is no guide breadcrumb object.

use serde_json::{json, Value};

use crate::{
    model::{Family, Guide, QuestionAnswer, SellPage},
    site::SiteConfig,
};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One breadcrumb step before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// 1-based position.
    pub position: usize,
    /// Visible name.
    pub name: String,
    /// Absolute URL.
    pub url: String,
}

/// Home → What We Buy → page.
pub fn sell_breadcrumbs(site: &SiteConfig, page: &SellPage) -> Vec<Crumb> {
    let steps = [
        ("Home".to_string(), site.url("/")),
        ("What We Buy".to_string(), site.url(Family::Sell.path_prefix())),
        (page.title.clone(), site.url(&Family::Sell.record_path(&page.slug))),
    ];
    steps
        .into_iter()
        .enumerate()
        .map(|(i, (name, url))| Crumb {
            position: i + 1,
            name,
            url,
        })
        .collect()
}

/// `BreadcrumbList` for a sell page.
pub fn breadcrumb_schema(site: &SiteConfig, page: &SellPage) -> Value {
    let items: Vec<Value> = sell_breadcrumbs(site, page)
        .into_iter()
        .map(|crumb| {
            json!({
                "@type": "ListItem",
                "position": crumb.position,
                "name": crumb.name,
                "item": crumb.url
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

/// `FAQPage` with one `Question` per entry, order kept, duplicates kept.
pub fn faq_schema<'a, I, F>(faqs: I) -> Value
where
    I: IntoIterator<Item = &'a F>,
    F: QuestionAnswer + 'a,
{
    let entities: Vec<Value> = faqs
        .into_iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question(),
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer()
                }
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities
    })
}

/// `Article` metadata for a guide.
pub fn article_schema(site: &SiteConfig, guide: &Guide) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": guide.title,
        "description": guide.meta_description,
        "datePublished": guide.published_date,
        "author": {
            "@type": "Organization",
            "name": site.site_name
        },
        "publisher": {
            "@type": "Organization",
            "name": site.site_name,
            "url": site.base_url
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": site.url(&Family::Guide.record_path(&guide.slug))
        }
    })
}

/// `Organization` block for the home page.
pub fn organization_schema(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": site.site_name,
        "url": site.base_url,
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": site.phone_e164,
            "contactType": "sales"
        }
    })
}

/// Serialize for embedding inside `<script type="application/ld+json">`.
///
/// `<` is escaped so copy containing `</script>` cannot close the tag early.
pub fn to_script_json(value: &Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "{}".to_string())
        .replace('<', "\\u003c")
}
