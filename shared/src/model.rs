//! Content record schemas.
//!
//! Every field carries `#[serde(default)]`: a record that drifts from the
//! schema renders with empty sections instead of failing to load.

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A content collection stored as one directory of JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Product and brand category pages under `/sell`.
    Sell,
    /// Long-form articles under `/guides`.
    Guide,
}

impl Family {
    /// All directory-backed families, in sitemap order.
    pub const ALL: [Family; 2] = [Family::Sell, Family::Guide];

    /// Directory name under the content root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Family::Sell => "sell",
            Family::Guide => "guides",
        }
    }

    /// URL path prefix for records of this family.
    pub fn path_prefix(self) -> &'static str {
        match self {
            Family::Sell => "/sell",
            Family::Guide => "/guides",
        }
    }

    /// Site path of a single record.
    pub fn record_path(self, slug: &str) -> String {
        format!("{}/{}", self.path_prefix(), urlencoding::encode(slug))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A record type that lives in a [`Family`] directory.
pub trait ContentRecord: DeserializeOwned {
    /// Family this record type is stored in.
    const FAMILY: Family;

    /// Slug of this record.
    fn slug(&self) -> &str;

    /// Mutable access used by the resolver to backfill an empty slug.
    fn slug_mut(&mut self) -> &mut String;
}

/// Anything that renders as one question in an FAQ block.
pub trait QuestionAnswer {
    /// Question text.
    fn question(&self) -> &str;
    /// Answer text.
    fn answer(&self) -> &str;
}

/// Page-scoped question/answer pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

impl QuestionAnswer for FaqItem {
    fn question(&self) -> &str {
        &self.question
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

/// Entry of the global FAQ list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    /// Unique id within the list.
    pub id: String,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

impl QuestionAnswer for Faq {
    fn question(&self) -> &str {
        &self.question
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

/// Internal link shown in a "Related" block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedLink {
    /// Visible link text.
    pub label: String,
    /// Site-relative target.
    pub href: String,
}

impl RelatedLink {
    /// Build a link from static table entries.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// True when the link targets the record with `slug`.
    pub fn points_at(&self, slug: &str) -> bool {
        self.href.ends_with(&format!("/{slug}"))
    }
}

/// Product category of a sell page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryType {
    /// Bourbon and American whiskey.
    Bourbon,
    /// Scotch whisky.
    Scotch,
    /// Japanese whisky.
    JapaneseWhisky,
    /// Still wine.
    Wine,
    /// Champagne and sparkling wine.
    Champagne,
    /// Cognac.
    Cognac,
    /// Other spirits.
    #[default]
    Spirits,
    /// Any stored value outside the known set.
    #[serde(other)]
    Other,
}

impl CategoryType {
    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryType::Bourbon => "bourbon",
            CategoryType::Scotch => "scotch",
            CategoryType::JapaneseWhisky => "japanese-whisky",
            CategoryType::Wine => "wine",
            CategoryType::Champagne => "champagne",
            CategoryType::Cognac => "cognac",
            CategoryType::Spirits => "spirits",
            CategoryType::Other => "other",
        }
    }
}

/// A "sell" page for one brand, producer or category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellPage {
    /// URL segment and unique id.
    pub slug: String,
    /// Display title (breadcrumb and card heading).
    pub title: String,
    /// `<title>` text including the site suffix.
    pub meta_title: String,
    /// Meta description.
    pub meta_description: String,
    /// Hero `<h1>`.
    pub hero_headline: String,
    /// Hero supporting line, also used on index cards.
    pub hero_subhead: String,
    /// Opening paragraph.
    pub intro_paragraph: String,
    /// Category driving bucket and related-link selection.
    pub category_type: CategoryType,
    /// Example bottles we buy.
    pub what_we_buy: Vec<String>,
    /// Items we decline.
    pub what_we_do_not_buy: Vec<String>,
    /// Photos to send for a quote.
    pub photo_checklist: Vec<String>,
    /// What affects condition grading.
    pub condition_factors: Vec<String>,
    /// What affects price.
    pub pricing_factors: Vec<String>,
    /// Page-scoped questions.
    pub faqs: Vec<FaqItem>,
    /// Authored related links; empty means "compute them".
    pub related_links: Vec<RelatedLink>,
    /// Global FAQ ids to surface on this page.
    pub faq_subset: Vec<String>,
}

impl ContentRecord for SellPage {
    const FAMILY: Family = Family::Sell;

    fn slug(&self) -> &str {
        &self.slug
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}

/// Grouping used on the guides index.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum GuideCategory {
    /// Estates and inherited collections.
    Estate,
    /// Practical how-to.
    Practical,
    /// Bottle condition.
    Condition,
    /// Seller safety.
    Safety,
    /// Life scenarios (moving, downsizing).
    Scenario,
    /// Missing or unknown category.
    #[default]
    #[serde(other)]
    Other,
}

impl GuideCategory {
    /// Display order on the guides index.
    pub const ORDERED: [GuideCategory; 6] = [
        GuideCategory::Estate,
        GuideCategory::Practical,
        GuideCategory::Condition,
        GuideCategory::Safety,
        GuideCategory::Scenario,
        GuideCategory::Other,
    ];

    /// Section heading on the guides index.
    pub fn heading(self) -> &'static str {
        match self {
            GuideCategory::Estate => "Estates and Inherited Collections",
            GuideCategory::Practical => "Practical Guides",
            GuideCategory::Condition => "Condition and Value",
            GuideCategory::Safety => "Selling Safely",
            GuideCategory::Scenario => "Common Situations",
            GuideCategory::Other => "More Guides",
        }
    }
}

/// One section of a guide body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideSection {
    /// Section `<h2>`.
    pub heading: String,
    /// Paragraphs in order.
    pub content: Vec<String>,
    /// Optional bullet list after the paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

/// A long-form guide article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Guide {
    /// URL segment and unique id.
    pub slug: String,
    /// Article headline.
    pub title: String,
    /// `<title>` text including the site suffix.
    pub meta_title: String,
    /// Meta description, also the Article description.
    pub meta_description: String,
    /// Index grouping.
    pub category: GuideCategory,
    /// Publication date as authored (`YYYY-MM-DD`).
    pub published_date: String,
    /// Lead paragraph.
    pub summary: String,
    /// Section headings for the in-page navigation.
    pub table_of_contents: Vec<String>,
    /// Body sections in order.
    pub sections: Vec<GuideSection>,
    /// Guide-scoped questions.
    pub faqs: Vec<FaqItem>,
    /// Authored related links.
    pub related_links: Vec<RelatedLink>,
}

impl ContentRecord for Guide {
    const FAMILY: Family = Family::Guide;

    fn slug(&self) -> &str {
        &self.slug
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}
