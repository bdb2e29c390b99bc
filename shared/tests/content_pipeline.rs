//! End-to-end checks over a content directory on disk.

use std::{fs, path::Path};

use proof_cellars_shared::{
    grouping::group_by_category,
    related::{related_links, RELATED_LINK_COUNT},
    structured_data::{breadcrumb_schema, faq_schema, to_script_json},
    CategoryType, ContentSnapshot, ContentStore, Family, Guide, SellPage, SiteConfig,
};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent dir")).expect("create dirs");
    fs::write(path, body).expect("write fixture");
}

fn sell_json(slug: &str, title: &str, category: &str) -> String {
    format!(
        r#"{{
  "slug": "{slug}",
  "title": "{title}",
  "metaTitle": "{title} | Proof Cellars",
  "metaDescription": "Get a direct offer.",
  "heroHeadline": "{title}",
  "heroSubhead": "Direct buyer.",
  "introParagraph": "Intro.",
  "categoryType": "{category}",
  "whatWeBuy": ["First", "Second", "Third"],
  "whatWeDoNotBuy": ["Opened bottles"],
  "photoChecklist": ["Front label"],
  "conditionFactors": ["Fill level"],
  "pricingFactors": ["Vintage"],
  "faqs": [{{"question": "Q?", "answer": "A."}}],
  "relatedLinks": []
}}"#
    )
}

fn fixture() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let root = dir.path();
    for (slug, title, category) in [
        ("van-winkle", "Sell Pappy Van Winkle", "bourbon"),
        ("bourbon", "Sell Bourbon", "bourbon"),
        ("macallan", "Sell Macallan", "scotch"),
        ("louis-xiii", "Sell Louis XIII", "cognac"),
        ("fortaleza", "Sell Fortaleza", "spirits"),
        ("petrus", "Sell Petrus", "wine"),
        ("dom-perignon", "Sell Dom Perignon", "champagne"),
        ("wine", "Sell Wine", "wine"),
    ] {
        write(root, &format!("sell/{slug}.json"), &sell_json(slug, title, category));
    }
    write(root, "sell/corrupt.json", "{\"slug\": ");
    write(
        root,
        "guides/inherited-cellar.json",
        r#"{"slug":"inherited-cellar","title":"Inherited Cellar","category":"estate","publishedDate":"2025-01-15"}"#,
    );
    let faqs: Vec<String> = (1..=20)
        .map(|i| format!(r#"{{"id":"q{i}","question":"Question {i}?","answer":"Answer {i}."}}"#))
        .collect();
    write(root, "faq.json", &format!("[{}]", faqs.join(",")));
    dir
}

#[test]
fn listed_slugs_resolve_and_unlisted_do_not() {
    let dir = fixture();
    let store = ContentStore::open(dir.path()).expect("open store");

    let slugs = store.list_slugs(Family::Sell).expect("list slugs");
    assert_eq!(slugs.len(), 9);
    for slug in slugs.iter().filter(|s| s.as_str() != "corrupt") {
        assert!(store.get_record::<SellPage>(slug).is_some(), "{slug} should resolve");
    }
    assert!(store.get_record::<SellPage>("corrupt").is_none());
    assert!(store.get_record::<SellPage>("does-not-exist").is_none());
    assert!(store.get_record::<SellPage>("../../etc/passwd").is_none());
    assert!(store.get_record::<Guide>("van-winkle").is_none());

    let records: Vec<SellPage> = store.list_all_records().expect("list records");
    assert!(records.len() <= slugs.len());
    assert_eq!(records.len(), slugs.len() - 1);
}

#[test]
fn van_winkle_scenario() {
    let dir = fixture();
    let store = ContentStore::open(dir.path()).expect("open store");
    let snapshot = ContentSnapshot::load(&store).expect("load snapshot");

    let page = snapshot.get_sell("van-winkle").expect("van-winkle present");
    assert_eq!(page.category_type, CategoryType::Bourbon);
    assert_eq!(page.what_we_buy, vec!["First", "Second", "Third"]);

    let groups = group_by_category(snapshot.sell_pages());
    assert!(groups.bourbon.iter().any(|p| p.slug == "van-winkle"));

    let links = related_links(page);
    assert_eq!(links.len(), RELATED_LINK_COUNT);
    assert_eq!(links[0].label, "Sell Bourbon");
    assert_eq!(links[0].href, "/sell/bourbon");
    assert!(links.iter().all(|l| !l.href.ends_with("/van-winkle")));
}

#[test]
fn every_sell_record_gets_three_non_self_links() {
    let dir = fixture();
    let store = ContentStore::open(dir.path()).expect("open store");
    let snapshot = ContentSnapshot::load(&store).expect("load snapshot");

    for page in snapshot.sell_pages() {
        let links = related_links(page);
        assert_eq!(links.len(), RELATED_LINK_COUNT, "{}", page.slug);
        assert!(
            links.iter().all(|l| !l.href.ends_with(&format!("/{}", page.slug))),
            "{} links to itself",
            page.slug
        );
    }
}

#[test]
fn snapshot_reports_unreadable_records() {
    let dir = fixture();
    let store = ContentStore::open(dir.path()).expect("open store");
    let snapshot = ContentSnapshot::load(&store).expect("load snapshot");

    assert_eq!(snapshot.unreadable_slugs(Family::Sell), vec!["corrupt"]);
    assert!(snapshot.unreadable_slugs(Family::Guide).is_empty());
    assert!(snapshot.get_sell("corrupt").is_none());
}

#[test]
fn faq_preview_and_schema_keep_authored_order() {
    let dir = fixture();
    let store = ContentStore::open(dir.path()).expect("open store");
    let faqs = store.load_faqs();

    let preview: Vec<&str> = faqs.first_n(6).iter().map(|f| f.id.as_str()).collect();
    assert_eq!(preview, vec!["q1", "q2", "q3", "q4", "q5", "q6"]);

    let schema = faq_schema(faqs.all());
    let names: Vec<&str> = schema["mainEntity"]
        .as_array()
        .expect("entities")
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(names.len(), 20);
    assert_eq!(names[0], "Question 1?");
    assert_eq!(names[19], "Question 20?");
}

#[test]
fn structured_data_is_byte_identical_across_calls() {
    let dir = fixture();
    let store = ContentStore::open(dir.path()).expect("open store");
    let site = SiteConfig::default();
    let first: SellPage = store.get_record("macallan").expect("macallan");
    let second: SellPage = store.get_record("macallan").expect("macallan");

    assert_eq!(first, second);
    assert_eq!(
        to_script_json(&breadcrumb_schema(&site, &first)),
        to_script_json(&breadcrumb_schema(&site, &second))
    );
    let crumbs = breadcrumb_schema(&site, &first);
    assert_eq!(crumbs["itemListElement"][2]["name"], "Sell Macallan");
}
