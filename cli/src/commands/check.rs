use std::{fmt, path::Path};

use anyhow::Result;
use proof_cellars_shared::{ContentSnapshot, Family};

use crate::utils::load_snapshot;

/// How serious a content issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The record cannot be served.
    Error,
    /// The record is served but something looks wrong.
    Warning,
}

/// One finding from [`check_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Error or warning.
    pub severity: Severity,
    /// Family of the offending record (`None` for the FAQ list).
    pub family: Option<Family>,
    /// Slug or FAQ id.
    pub id: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let family = self.family.map_or("faq", Family::dir_name);
        write!(f, "{level}: {family}/{}: {}", self.id, self.message)
    }
}

/// All findings for a snapshot.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Findings in discovery order.
    pub issues: Vec<Issue>,
}

impl CheckReport {
    fn push(&mut self, severity: Severity, family: Option<Family>, id: &str, message: String) {
        self.issues.push(Issue {
            severity,
            family,
            id: id.to_string(),
            message,
        });
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == Severity::Error).count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == Severity::Warning).count()
    }
}

/// Inspect every record of the snapshot.
pub fn check_snapshot(snapshot: &ContentSnapshot) -> CheckReport {
    let mut report = CheckReport::default();

    for family in Family::ALL {
        for slug in snapshot.unreadable_slugs(family) {
            report.push(
                Severity::Error,
                Some(family),
                slug,
                "document is missing or does not parse; it will be served as not found"
                    .to_string(),
            );
        }
    }

    for page in snapshot.sell_pages() {
        let family = Some(Family::Sell);
        if page.title.trim().is_empty() {
            report.push(Severity::Warning, family, &page.slug, "title is empty".to_string());
        }
        for link in page.related_links.iter().filter(|l| l.points_at(&page.slug)) {
            report.push(
                Severity::Warning,
                family,
                &page.slug,
                format!("authored related link {:?} points at the page itself", link.href),
            );
        }
        for id in &page.faq_subset {
            if snapshot.faqs().by_ids(std::slice::from_ref(id)).is_empty() {
                report.push(
                    Severity::Warning,
                    family,
                    &page.slug,
                    format!("faqSubset references unknown FAQ id {id:?}"),
                );
            }
        }
    }

    for guide in snapshot.guides() {
        let family = Some(Family::Guide);
        if guide.title.trim().is_empty() {
            report.push(Severity::Warning, family, &guide.slug, "title is empty".to_string());
        }
        if guide.table_of_contents.len() != guide.sections.len() {
            report.push(
                Severity::Warning,
                family,
                &guide.slug,
                format!(
                    "table of contents has {} entries but there are {} sections",
                    guide.table_of_contents.len(),
                    guide.sections.len()
                ),
            );
        }
        if chrono::NaiveDate::parse_from_str(&guide.published_date, "%Y-%m-%d").is_err() {
            report.push(
                Severity::Warning,
                family,
                &guide.slug,
                format!("publishedDate {:?} is not YYYY-MM-DD", guide.published_date),
            );
        }
    }

    let mut seen = std::collections::HashSet::new();
    for faq in snapshot.faqs().all() {
        if !seen.insert(faq.id.as_str()) {
            report.push(Severity::Warning, None, &faq.id, "duplicate FAQ id".to_string());
        }
    }

    report
}

/// Print findings and fail when any error (or, with `strict`, any warning) exists.
pub fn run(content_dir: &Path, strict: bool) -> Result<()> {
    let snapshot = load_snapshot(content_dir)?;
    let report = check_snapshot(&snapshot);

    for issue in &report.issues {
        match issue.severity {
            Severity::Error => tracing::error!("{issue}"),
            Severity::Warning => tracing::warn!("{issue}"),
        }
    }
    tracing::info!(
        "Checked {} sell pages, {} guides, {} FAQs: {} errors, {} warnings",
        snapshot.sell_pages().len(),
        snapshot.guides().len(),
        snapshot.faqs().len(),
        report.error_count(),
        report.warning_count()
    );

    if report.error_count() > 0 || (strict && report.warning_count() > 0) {
        anyhow::bail!("content check failed");
    }
    Ok(())
}
