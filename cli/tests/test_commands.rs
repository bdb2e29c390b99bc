//! Integration tests for CLI commands.

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use chrono::NaiveDate;
    use pc_cli::{
        cli::ListFamily,
        commands::{
            build::build_site,
            check::{check_snapshot, Severity},
            list, show,
        },
        utils,
    };
    use proof_cellars_shared::{related::related_links, ContentStore, Family, SiteConfig};
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, body).expect("write fixture");
    }

    fn content() -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path();
        write(
            root,
            "sell/van-winkle.json",
            r#"{"slug":"van-winkle","title":"Sell Pappy Van Winkle","metaTitle":"Sell Pappy Van Winkle | Proof Cellars","categoryType":"bourbon","faqs":[{"question":"Do you buy Pappy 10?","answer":"Yes."}],"faqSubset":["fees","ghost"]}"#,
        );
        write(
            root,
            "sell/macallan.json",
            r#"{"slug":"macallan","title":"Sell Macallan","categoryType":"scotch","relatedLinks":[{"label":"Self","href":"/sell/macallan"}]}"#,
        );
        write(root, "sell/broken.json", "{");
        write(
            root,
            "guides/inherited-cellar.json",
            r#"{"slug":"inherited-cellar","title":"Inherited Cellar","category":"estate","publishedDate":"2025-01-15","tableOfContents":["One","Two"],"sections":[{"heading":"One","content":["p"]}]}"#,
        );
        write(
            root,
            "faq.json",
            r#"[{"id":"fees","question":"Any fees?","answer":"No."},{"id":"fees","question":"Again?","answer":"No."}]"#,
        );
        dir
    }

    #[test]
    fn list_collects_slugs_and_faq_ids() {
        let dir = content();
        let store = ContentStore::open(dir.path()).expect("open store");

        let sell = list::collect(&store, ListFamily::Sell).expect("list sell");
        assert_eq!(sell, vec!["broken", "macallan", "van-winkle"]);
        let faq = list::collect(&store, ListFamily::Faq).expect("list faq");
        assert_eq!(faq, vec!["fees", "fees"]);
    }

    #[test]
    fn show_describes_sell_record_and_rejects_unknown() {
        let dir = content();
        let store = ContentStore::open(dir.path()).expect("open store");
        let site = SiteConfig::default();

        let value = show::describe(&store, &site, Family::Sell, "van-winkle").expect("present");
        assert_eq!(value["bucket"], "bourbon");
        assert_eq!(value["url"], "https://proofcellars.com/sell/van-winkle");
        assert_eq!(value["relatedLinks"][0]["href"], "/sell/bourbon");
        assert_eq!(value["structuredData"][0]["@type"], "BreadcrumbList");
        assert_eq!(value["record"]["categoryType"], "bourbon");

        assert!(show::describe(&store, &site, Family::Sell, "broken").is_none());
        assert!(show::describe(&store, &site, Family::Sell, "../faq").is_none());
        assert!(show::describe(&store, &site, Family::Guide, "van-winkle").is_none());
    }

    #[test]
    fn check_flags_content_problems() {
        let dir = content();
        let snapshot = utils::load_snapshot(dir.path()).expect("load snapshot");
        let report = check_snapshot(&snapshot);

        assert_eq!(report.error_count(), 1);
        let error = report
            .issues
            .iter()
            .find(|i| i.severity == Severity::Error)
            .expect("error issue");
        assert_eq!(error.id, "broken");

        let messages: Vec<String> = report.issues.iter().map(|i| i.to_string()).collect();
        assert!(messages.iter().any(|m| m.contains("sell/macallan") && m.contains("itself")));
        assert!(messages.iter().any(|m| m.contains("unknown FAQ id \"ghost\"")));
        assert!(messages.iter().any(|m| m.contains("guides/inherited-cellar")
            && m.contains("2 entries but there are 1 sections")));
        assert!(messages.iter().any(|m| m.contains("faq/fees") && m.contains("duplicate")));
    }

    #[test]
    fn build_writes_every_page_and_crawl_file() {
        let dir = content();
        let out = TempDir::new().expect("create out dir");
        let snapshot = utils::load_snapshot(dir.path()).expect("load snapshot");
        let site = SiteConfig::default().with_base_url("https://example.test");
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");

        let summary = build_site(&snapshot, &site, out.path(), date).expect("build site");
        assert_eq!(summary.sell_pages, 2);
        assert_eq!(summary.guides, 1);
        assert_eq!(summary.files, 17);

        for rel in [
            "index.html",
            "404.html",
            "faq/index.html",
            "sell/index.html",
            "sell/van-winkle/index.html",
            "sell/macallan/index.html",
            "guides/index.html",
            "guides/inherited-cellar/index.html",
            "get-offer/index.html",
            "contact/index.html",
            "resources/photos-for-quote/index.html",
            "resources/how-pricing-works/index.html",
            "privacy/index.html",
            "terms/index.html",
            "sitemap.xml",
            "robots.txt",
            "llms.txt",
        ] {
            assert!(out.path().join(rel).is_file(), "{rel} missing");
        }
        assert!(!out.path().join("sell/broken/index.html").exists());

        let page = fs::read_to_string(out.path().join("sell/van-winkle/index.html"))
            .expect("read page");
        assert!(page.contains("https://example.test/sell/van-winkle"));
        assert!(page.contains("Any fees?"));

        let sitemap = fs::read_to_string(out.path().join("sitemap.xml")).expect("read sitemap");
        assert!(sitemap.contains("<lastmod>2026-01-02</lastmod>"));
        assert!(sitemap.contains("https://example.test/guides/inherited-cellar"));
    }

    #[test]
    fn build_paths_follow_file_names_not_declared_slugs() {
        let content = TempDir::new().expect("create temp dir");
        write(content.path(), "sell/innocent.json", r#"{"slug":"../../escaped","title":"Innocent"}"#);
        write(
            content.path(),
            "sell/macallan.json",
            r#"{"slug":"van-winkle","title":"Sell Macallan","categoryType":"scotch"}"#,
        );
        write(
            content.path(),
            "sell/van-winkle.json",
            r#"{"slug":"van-winkle","title":"Sell Pappy Van Winkle","categoryType":"bourbon"}"#,
        );
        let parent = TempDir::new().expect("create parent dir");
        let out = parent.path().join("dist");
        let snapshot = utils::load_snapshot(content.path()).expect("load snapshot");
        let site = SiteConfig::default();
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");

        let summary = build_site(&snapshot, &site, &out, date).expect("build site");
        assert_eq!(summary.sell_pages, 3);
        assert!(out.join("sell/innocent/index.html").is_file());
        assert!(!parent.path().join("escaped").exists());
        assert!(!out.join("escaped").exists());

        let macallan = fs::read_to_string(out.join("sell/macallan/index.html")).expect("read page");
        assert!(macallan.contains(r#"<link rel="canonical" href="https://proofcellars.com/sell/macallan" />"#));
        let page = snapshot.get_sell("macallan").expect("macallan present");
        assert!(related_links(page).iter().all(|link| !link.points_at("macallan")));

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).expect("read sitemap");
        let llms = fs::read_to_string(out.join("llms.txt")).expect("read llms.txt");
        for slug in ["innocent", "macallan", "van-winkle"] {
            let url = format!("https://proofcellars.com/sell/{slug}");
            assert!(sitemap.contains(&format!("<loc>{url}</loc>")), "{slug} missing from sitemap");
            assert!(llms.contains(&format!("{url} - ")), "{slug} missing from llms.txt");
        }
        assert_eq!(sitemap.matches("/sell/van-winkle</loc>").count(), 1);
    }
}
