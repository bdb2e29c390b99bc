//! Plain HTML page rendering.
//!
//! Pages are assembled from `format!` templates. All content copy goes through
//! [`html_escape`] / [`html_attr_escape`]; JSON-LD goes through
//! [`to_script_json`]. No styling is emitted beyond structural class names.

use serde_json::Value;

use crate::{
    faq::FaqList,
    grouping::{group_by_category, group_guides_by_category},
    model::{Family, Guide, QuestionAnswer, RelatedLink, SellPage},
    pages::StaticPage,
    related::related_links,
    site::SiteConfig,
    snapshot::ContentSnapshot,
    structured_data::{
        article_schema, breadcrumb_schema, faq_schema, organization_schema, to_script_json,
    },
};

/// Number of FAQs previewed on the home page.
pub const HOME_FAQ_PREVIEW: usize = 6;

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text for an HTML text node.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for a double- or single-quoted attribute value.
pub fn html_attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;").replace('\'', "&#39;")
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

struct PageHead<'a> {
    title: &'a str,
    og_title: &'a str,
    description: &'a str,
    path: &'a str,
    og_type: &'a str,
    robots: &'a str,
}

/// `<title>` text: the authored meta title without the brand suffix, then the
/// suffix appended once. Falls back to `fallback` when the meta title is blank.
fn document_title(site: &SiteConfig, meta_title: &str, fallback: &str) -> String {
    let suffix = format!(" | {}", site.site_name);
    let base = meta_title.trim();
    let base = if base.is_empty() { fallback.trim() } else { base };
    let stripped = base.strip_suffix(suffix.as_str()).unwrap_or(base);
    if stripped.is_empty() || stripped == site.site_name {
        return site.site_name.clone();
    }
    format!("{stripped}{suffix}")
}

fn layout(site: &SiteConfig, head: &PageHead<'_>, json_ld: &[Value], main: &str) -> String {
    let canonical = site.url(head.path);
    let scripts: String = json_ld
        .iter()
        .map(|value| {
            format!(
                "<script type=\"application/ld+json\">{}</script>\n",
                to_script_json(value)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<meta name="description" content="{desc}" />
<meta name="robots" content="{robots}" />
<link rel="canonical" href="{canonical}" />
<meta property="og:title" content="{og_title}" />
<meta property="og:description" content="{desc}" />
<meta property="og:url" content="{canonical}" />
<meta property="og:type" content="{og_type}" />
<meta property="og:site_name" content="{site_name}" />
{scripts}</head>
<body>
{header}
<main>
{main}
</main>
{footer}
</body>
</html>
"#,
        title = html_escape(head.title),
        desc = html_attr_escape(head.description),
        robots = html_attr_escape(head.robots),
        canonical = html_attr_escape(&canonical),
        og_title = html_attr_escape(head.og_title),
        og_type = html_attr_escape(head.og_type),
        site_name = html_attr_escape(&site.site_name),
        scripts = scripts,
        header = site_header(site),
        main = main,
        footer = site_footer(site),
    )
}

fn site_header(site: &SiteConfig) -> String {
    format!(
        r#"<header class="site-header">
<a class="brand" href="/">{name}</a>
<nav class="site-nav">
<a href="/sell">What We Buy</a>
<a href="/guides">Guides</a>
<a href="/faq">FAQ</a>
<a href="{offer}">Get an Offer</a>
</nav>
</header>"#,
        name = html_escape(&site.site_name),
        offer = StaticPage::GetOffer.path(),
    )
}

fn site_footer(site: &SiteConfig) -> String {
    format!(
        r#"<footer class="site-footer">
<p>{name} is a direct buyer of collectible wine and spirits.</p>
<p><a href="{sms}">Text photos to {phone}</a> · <a href="mailto:{email}">{email_text}</a></p>
<nav><a href="{contact}">Contact</a> <a href="{privacy}">Privacy</a> <a href="{terms}">Terms</a></nav>
</footer>"#,
        contact = StaticPage::Contact.path(),
        privacy = StaticPage::Privacy.path(),
        terms = StaticPage::Terms.path(),
        name = html_escape(&site.site_name),
        sms = html_attr_escape(&site.sms_href()),
        phone = html_escape(&site.phone_display),
        email = html_attr_escape(&site.email),
        email_text = html_escape(&site.email),
    )
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

fn cta_buttons(site: &SiteConfig) -> String {
    format!(
        r#"<div class="cta">
<a class="button" href="{offer}">Get an Offer</a>
<a class="button secondary" href="{sms}">Text Photos to {phone}</a>
</div>"#,
        offer = StaticPage::GetOffer.path(),
        sms = html_attr_escape(&site.sms_href()),
        phone = html_escape(&site.phone_display),
    )
}

/// `<ul>` of escaped strings in the given order; empty input yields nothing.
fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>");
    html
}

fn list_section(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("<section>\n<h2>{}</h2>\n{}\n</section>\n", html_escape(heading), bullet_list(items))
}

fn faq_block<'a, F, I>(faqs: I) -> String
where
    F: QuestionAnswer + 'a,
    I: IntoIterator<Item = &'a F>,
{
    let mut html = String::new();
    for faq in faqs {
        html.push_str(&format!(
            "<div class=\"faq\">\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
            html_escape(faq.question()),
            html_escape(faq.answer())
        ));
    }
    html
}

fn link_row(links: &[RelatedLink]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{}\">{}</a>",
                html_attr_escape(&link.href),
                html_escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn inline_breadcrumb(steps: &[(&str, Option<&str>)]) -> String {
    let items: Vec<String> = steps
        .iter()
        .map(|(name, href)| match href {
            Some(href) => format!(
                "<li><a href=\"{}\">{}</a></li>",
                html_attr_escape(href),
                html_escape(name)
            ),
            None => format!("<li aria-current=\"page\">{}</li>", html_escape(name)),
        })
        .collect();
    format!("<nav class=\"breadcrumb\"><ol>{}</ol></nav>", items.join("<li>/</li>"))
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Home page with the organization block and a short FAQ preview.
pub fn render_home_page(site: &SiteConfig, faqs: &FaqList) -> String {
    let preview = faqs.first_n(HOME_FAQ_PREVIEW);
    let mut main = format!(
        r#"<section class="hero">
<h1>Direct buyer of collectible wine and spirits.</h1>
<p>Sell bourbon, scotch, and fine wine directly. No consignment fees. Text us photos and get an offer.</p>
{cta}
</section>
<section>
<h2>How it works</h2>
<ol>
<li>Submit photos and a bottle list through the form or by text.</li>
<li>Receive an offer within one business day.</li>
<li>Ship with a prepaid label or arrange pickup.</li>
<li>Get paid after inspection.</li>
</ol>
</section>
"#,
        cta = cta_buttons(site),
    );
    if !preview.is_empty() {
        main.push_str(&format!(
            "<section id=\"faq\">\n<h2>Common Questions</h2>\n{}<p><a href=\"/faq\">See all \
             questions</a></p>\n</section>\n",
            faq_block(preview)
        ));
    }

    let description = "Direct buyer of collectible wine and spirits. Sell Bourbon, Scotch, and \
                       Fine Wine. No fees. Just text us photos and get an offer.";
    layout(
        site,
        &PageHead {
            title: &site.site_name,
            og_title: &site.site_name,
            description,
            path: "/",
            og_type: "website",
            robots: "index,follow",
        },
        &[organization_schema(site)],
        &main,
    )
}

/// "What We Buy" index with one section per non-empty bucket.
pub fn render_sell_index(site: &SiteConfig, snapshot: &ContentSnapshot) -> String {
    let groups = group_by_category(snapshot.sell_pages());
    let mut main = format!(
        r#"<section class="hero">
<h1>What We Buy</h1>
<p>We buy collectible wine and spirits directly. Browse the categories below to see what we purchase, or submit your bottles for a direct offer.</p>
{cta}
</section>
"#,
        cta = cta_buttons(site),
    );

    for (bucket, pages) in groups.iter() {
        if pages.is_empty() {
            continue;
        }
        main.push_str(&format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n<p>{}</p>\n<div class=\"cards\">\n",
            bucket.key(),
            html_escape(bucket.heading()),
            html_escape(bucket.blurb())
        ));
        for page in pages {
            main.push_str(&format!(
                "<a class=\"card\" href=\"{}\"><h3>{}</h3><p>{}</p></a>\n",
                html_attr_escape(&Family::Sell.record_path(&page.slug)),
                html_escape(&page.title),
                html_escape(&page.hero_subhead)
            ));
        }
        main.push_str("</div>\n</section>\n");
    }

    let title = document_title(site, "What We Buy", "");
    let description = "Proof Cellars buys bourbon, scotch, wine, and champagne. Browse our \
                       categories to learn what we purchase and get a direct offer.";
    layout(
        site,
        &PageHead {
            title: &title,
            og_title: &title,
            description,
            path: Family::Sell.path_prefix(),
            og_type: "website",
            robots: "index,follow",
        },
        &[],
        &main,
    )
}

/// One sell page with breadcrumb and FAQ structured data.
pub fn render_sell_page(site: &SiteConfig, page: &SellPage, global_faqs: &FaqList) -> String {
    let mut main = inline_breadcrumb(&[
        ("Home", Some("/")),
        ("What We Buy", Some(Family::Sell.path_prefix())),
        (page.title.as_str(), None),
    ]);
    main.push_str(&format!(
        r#"
<section class="hero">
<h1>{headline}</h1>
<p>{subhead}</p>
{cta}
</section>
"#,
        headline = html_escape(&page.hero_headline),
        subhead = html_escape(&page.hero_subhead),
        cta = cta_buttons(site),
    ));
    if !page.intro_paragraph.is_empty() {
        main.push_str(&format!(
            "<section>\n<p>{}</p>\n</section>\n",
            html_escape(&page.intro_paragraph)
        ));
    }
    if !page.what_we_buy.is_empty() {
        main.push_str(&format!(
            "<section>\n<h2>What We Buy (Examples)</h2>\n<p>These are examples, not a full list. \
             If you have anything else from this producer, including older bottles and odd \
             releases, submit it and we will review it.</p>\n{}\n</section>\n",
            bullet_list(&page.what_we_buy)
        ));
    }
    main.push_str(&list_section("What We Do Not Buy", &page.what_we_do_not_buy));
    main.push_str(&list_section("What to Send for a Quote", &page.photo_checklist));
    main.push_str(&list_section("Condition Factors", &page.condition_factors));
    main.push_str(&list_section("Pricing Factors", &page.pricing_factors));

    let subset = global_faqs.by_ids(&page.faq_subset);
    if !page.faqs.is_empty() || !subset.is_empty() {
        main.push_str("<section id=\"faq\">\n<h2>Common Questions</h2>\n");
        main.push_str(&faq_block(&page.faqs));
        main.push_str(&faq_block(subset.iter().copied()));
        main.push_str("</section>\n");
    }

    let mut links = vec![
        RelatedLink::new("What We Buy", Family::Sell.path_prefix()),
        RelatedLink::new("Get an Offer", StaticPage::GetOffer.path()),
        RelatedLink::new("Photos for Quote", StaticPage::PhotosForQuote.path()),
        RelatedLink::new("How Pricing Works", StaticPage::HowPricingWorks.path()),
    ];
    links.extend(related_links(page));
    main.push_str(&format!(
        "<section class=\"related\">\n<h2>Related</h2>\n<div class=\"links\">\n{}\n</div>\n</section>\n",
        link_row(&links)
    ));
    main.push_str(&format!(
        r#"<section class="cta-band">
<h2>Ready to sell?</h2>
<p>Get a direct offer with no consignment fees.</p>
<p>Not sure what you have or do not see it listed? Submit it through the form, or text photos to {phone}.</p>
{cta}
</section>
"#,
        phone = html_escape(&site.phone_display),
        cta = cta_buttons(site),
    ));

    let title = document_title(site, &page.meta_title, &page.title);
    let og_title = if page.meta_title.is_empty() { &title } else { &page.meta_title };
    let path = Family::Sell.record_path(&page.slug);
    layout(
        site,
        &PageHead {
            title: &title,
            og_title,
            description: &page.meta_description,
            path: &path,
            og_type: "website",
            robots: "index,follow",
        },
        &[breadcrumb_schema(site, page), faq_schema(&page.faqs)],
        &main,
    )
}

/// Guides hub grouped by guide category.
pub fn render_guides_index(site: &SiteConfig, snapshot: &ContentSnapshot) -> String {
    let mut main = String::from(
        "<section class=\"hero\">\n<h1>Guides</h1>\n<p>Practical guides for selling a \
         collection, handling an estate, and understanding what affects value.</p>\n</section>\n",
    );
    for (category, guides) in group_guides_by_category(snapshot.guides()) {
        main.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<div class=\"cards\">\n",
            html_escape(category.heading())
        ));
        for guide in guides {
            main.push_str(&format!(
                "<a class=\"card\" href=\"{}\"><h3>{}</h3><p>{}</p></a>\n",
                html_attr_escape(&Family::Guide.record_path(&guide.slug)),
                html_escape(&guide.title),
                html_escape(&guide.summary)
            ));
        }
        main.push_str("</div>\n</section>\n");
    }

    let title = document_title(site, "Guides", "");
    layout(
        site,
        &PageHead {
            title: &title,
            og_title: &title,
            description: "Guides to selling collectible wine and spirits: estates, condition, \
                          packing, and choosing between consignment and a direct sale.",
            path: Family::Guide.path_prefix(),
            og_type: "website",
            robots: "index,follow",
        },
        &[],
        &main,
    )
}

/// One guide with article and FAQ structured data.
///
/// The breadcrumb is inline HTML only.
pub fn render_guide_page(site: &SiteConfig, guide: &Guide) -> String {
    let mut main = String::from("<article>\n");
    main.push_str(&inline_breadcrumb(&[
        ("Home", Some("/")),
        ("Guides", Some(Family::Guide.path_prefix())),
        (guide.title.as_str(), None),
    ]));
    main.push_str(&format!(
        "\n<header>\n<h1>{}</h1>\n<p>{}</p>\n</header>\n",
        html_escape(&guide.title),
        html_escape(&guide.summary)
    ));

    main.push_str("<nav class=\"toc\">\n<h2>In This Guide</h2>\n<ul>\n");
    for (index, item) in guide.table_of_contents.iter().enumerate() {
        main.push_str(&format!(
            "<li><a href=\"#section-{index}\">{}</a></li>\n",
            html_escape(item)
        ));
    }
    main.push_str("<li><a href=\"#faq\">Frequently Asked Questions</a></li>\n</ul>\n</nav>\n");

    for (index, section) in guide.sections.iter().enumerate() {
        main.push_str(&format!(
            "<section id=\"section-{index}\">\n<h2>{}</h2>\n",
            html_escape(&section.heading)
        ));
        for paragraph in &section.content {
            main.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
        }
        if let Some(list) = section.list.as_deref().filter(|l| !l.is_empty()) {
            main.push_str(&bullet_list(list));
            main.push('\n');
        }
        main.push_str("</section>\n");
    }

    main.push_str(&format!(
        r#"<aside class="cta-block">
<h2>What to Do Next</h2>
<p>Ready to get an offer for your bottles? Submit photos and details through our form, or text photos directly if that is easier.</p>
{cta}
</aside>
"#,
        cta = cta_buttons(site),
    ));
    main.push_str(&format!(
        "<section id=\"faq\">\n<h2>Frequently Asked Questions</h2>\n{}</section>\n",
        faq_block(&guide.faqs)
    ));
    if !guide.related_links.is_empty() {
        main.push_str(&format!(
            "<section class=\"related\">\n<h2>Related</h2>\n<div class=\"links\">\n{}\n</div>\n</section>\n",
            link_row(&guide.related_links)
        ));
    }
    main.push_str("</article>");

    let title = document_title(site, &guide.meta_title, &guide.title);
    let og_title = if guide.meta_title.is_empty() { &title } else { &guide.meta_title };
    let path = Family::Guide.record_path(&guide.slug);
    layout(
        site,
        &PageHead {
            title: &title,
            og_title,
            description: &guide.meta_description,
            path: &path,
            og_type: "article",
            robots: "index,follow",
        },
        &[article_schema(site, guide), faq_schema(&guide.faqs)],
        &main,
    )
}

/// Full FAQ list with its structured data.
pub fn render_faq_page(site: &SiteConfig, faqs: &FaqList) -> String {
    let main = format!(
        "<section class=\"hero\">\n<h1>Frequently Asked Questions</h1>\n</section>\n<section>\n{}</section>\n{}\n",
        faq_block(faqs.all()),
        cta_buttons(site)
    );
    let title = document_title(site, "FAQ", "");
    layout(
        site,
        &PageHead {
            title: &title,
            og_title: &title,
            description: "Answers to common questions about selling wine and spirits to a \
                          direct buyer: offers, shipping, payment, and what we buy.",
            path: "/faq",
            og_type: "website",
            robots: "index,follow",
        },
        &[faq_schema(faqs.all())],
        &main,
    )
}

/// One of the fixed pages, with the contact card where the page calls for it.
pub fn render_static_page(site: &SiteConfig, page: StaticPage) -> String {
    let mut main = format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n</section>\n",
        html_escape(page.title())
    );
    if page.shows_contact_card() {
        main.push_str(&format!(
            r#"<section class="contact-card">
<h2>Text Photos Instead</h2>
<p><a href="{sms}">{phone}</a></p>
<p><a href="{sms}">Tap to Text</a> · <a href="{tel}">Tap to Call</a></p>
<p><a href="mailto:{email}">{email_text}</a></p>
</section>
"#,
            sms = html_attr_escape(&site.sms_href()),
            tel = html_attr_escape(&site.tel_href()),
            phone = html_escape(&site.phone_display),
            email = html_attr_escape(&site.email),
            email_text = html_escape(&site.email),
        ));
    }
    for section in page.sections() {
        main.push_str(&format!("<section>\n<h2>{}</h2>\n", html_escape(section.heading)));
        for paragraph in section.paragraphs {
            main.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
        }
        if !section.list.is_empty() {
            main.push_str("<ul>\n");
            for item in section.list {
                main.push_str(&format!("<li>{}</li>\n", html_escape(item)));
            }
            main.push_str("</ul>\n");
        }
        main.push_str("</section>\n");
    }
    if page != StaticPage::GetOffer {
        main.push_str(&cta_buttons(site));
        main.push('\n');
    }

    let title = document_title(site, page.title(), "");
    layout(
        site,
        &PageHead {
            title: &title,
            og_title: &title,
            description: page.description(),
            path: page.path(),
            og_type: "website",
            robots: "index,follow",
        },
        &[],
        &main,
    )
}

/// Uniform not-found page, used for absent, corrupt and malformed slugs alike.
pub fn render_not_found(site: &SiteConfig) -> String {
    let main = "<section>\n<h1>Page not found</h1>\n<p>The page you are looking for does not \
                exist. <a href=\"/sell\">See what we buy</a> or <a href=\"/\">go home</a>.</p>\n\
                </section>\n";
    let title = document_title(site, "Not Found", "");
    layout(
        site,
        &PageHead {
            title: &title,
            og_title: &title,
            description: "Page not found.",
            path: "/404",
            og_type: "website",
            robots: "noindex,follow",
        },
        &[],
        main,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryType, Faq, FaqItem, GuideSection};

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    fn van_winkle() -> SellPage {
        SellPage {
            slug: "van-winkle".to_string(),
            title: "Sell Pappy Van Winkle".to_string(),
            meta_title: "Sell Pappy Van Winkle | Proof Cellars".to_string(),
            meta_description: "Direct offers for Pappy.".to_string(),
            hero_headline: "Sell Pappy <Van Winkle>".to_string(),
            category_type: CategoryType::Bourbon,
            what_we_buy: vec!["Pappy 23".to_string(), "Pappy 15".to_string()],
            faqs: vec![FaqItem {
                question: "Do you buy Pappy 10?".to_string(),
                answer: "Yes.".to_string(),
            }],
            faq_subset: vec!["fees".to_string()],
            ..SellPage::default()
        }
    }

    #[test]
    fn escaping_covers_markup_and_quotes() {
        assert_eq!(html_escape("<a & b>"), "&lt;a &amp; b&gt;");
        assert_eq!(html_attr_escape(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn document_title_strips_and_reapplies_suffix() {
        let site = site();
        assert_eq!(
            document_title(&site, "Sell Macallan | Proof Cellars", "x"),
            "Sell Macallan | Proof Cellars"
        );
        assert_eq!(document_title(&site, "Sell Macallan", "x"), "Sell Macallan | Proof Cellars");
        assert_eq!(document_title(&site, "", "Fallback"), "Fallback | Proof Cellars");
    }

    #[test]
    fn sell_page_embeds_schemas_and_related_links() {
        let faqs = FaqList::new(vec![Faq {
            id: "fees".to_string(),
            question: "Are there fees?".to_string(),
            answer: "No fees.".to_string(),
        }]);
        let html = render_sell_page(&site(), &van_winkle(), &faqs);

        assert!(html.contains("\"@type\":\"BreadcrumbList\""));
        assert!(html.contains("\"@type\":\"FAQPage\""));
        assert!(html.contains("<title>Sell Pappy Van Winkle | Proof Cellars</title>"));
        assert!(html.contains("<h1>Sell Pappy &lt;Van Winkle&gt;</h1>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://proofcellars.com/sell/van-winkle" />"#));
        assert!(html.contains(r#"<a href="/sell/bourbon">Sell Bourbon</a>"#));
        assert!(!html.contains(r#"href="/sell/van-winkle""#));
        assert!(html.contains("Are there fees?"));
        let first = html.find("Pappy 23").expect("first item");
        let second = html.find("Pappy 15").expect("second item");
        assert!(first < second);
    }

    #[test]
    fn guide_page_links_toc_to_sections_without_breadcrumb_schema() {
        let guide = Guide {
            slug: "inherited-cellar".to_string(),
            title: "Selling an Inherited Cellar".to_string(),
            table_of_contents: vec!["Start".to_string(), "Next".to_string()],
            sections: vec![
                GuideSection {
                    heading: "Start".to_string(),
                    content: vec!["Take inventory.".to_string()],
                    list: None,
                },
                GuideSection {
                    heading: "Next".to_string(),
                    content: Vec::new(),
                    list: Some(vec!["Photos".to_string()]),
                },
            ],
            ..Guide::default()
        };
        let html = render_guide_page(&site(), &guide);

        assert!(html.contains(r##"<a href="#section-0">Start</a>"##));
        assert!(html.contains(r##"<a href="#section-1">Next</a>"##));
        assert!(html.contains(r#"<section id="section-1">"#));
        assert!(html.contains(r##"<a href="#faq">"##));
        assert!(html.contains("\"@type\":\"Article\""));
        assert!(!html.contains("BreadcrumbList"));
        assert!(html.contains(r#"<nav class="breadcrumb">"#));
        assert!(html.contains("<li>Photos</li>"));
    }

    #[test]
    fn sell_index_skips_empty_buckets() {
        let snapshot = ContentSnapshot::from_records(
            vec![SellPage {
                slug: "petrus".to_string(),
                title: "Sell Petrus".to_string(),
                category_type: CategoryType::Wine,
                ..SellPage::default()
            }],
            Vec::new(),
            FaqList::default(),
        );
        let html = render_sell_index(&site(), &snapshot);
        assert!(html.contains(r#"<section id="wine-and-champagne">"#));
        assert!(!html.contains(r#"<section id="bourbon">"#));
        assert!(html.contains(r#"href="/sell/petrus""#));
    }

    #[test]
    fn home_page_previews_first_faqs() {
        let faqs = FaqList::new(
            (1..=8)
                .map(|i| Faq {
                    id: format!("q{i}"),
                    question: format!("Question number {i}?"),
                    answer: "Answer.".to_string(),
                })
                .collect(),
        );
        let html = render_home_page(&site(), &faqs);
        assert!(html.contains("Question number 6?"));
        assert!(!html.contains("Question number 7?"));
        assert!(html.contains("\"@type\":\"Organization\""));
    }

    #[test]
    fn not_found_is_noindex() {
        let html = render_not_found(&site());
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"content="noindex,follow""#));
    }

    #[test]
    fn static_pages_render_with_canonical_and_contact_card() {
        let site = site();
        let offer = render_static_page(&site, StaticPage::GetOffer);
        assert!(offer.contains("<h1>Get an Offer</h1>"));
        assert!(offer.contains(r#"href="https://proofcellars.com/get-offer""#));
        assert!(offer.contains("tel:+12137709463"));
        assert!(offer.contains("Bottle list (names, sizes, vintages)"));

        let terms = render_static_page(&site, StaticPage::Terms);
        assert!(terms.contains("<title>Terms of Use | Proof Cellars</title>"));
        assert!(!terms.contains("contact-card"));
    }
}
