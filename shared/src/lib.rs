//! Content model and static page generation for the Proof Cellars site.
//!
//! Records live as one JSON document per slug under a content root
//! ([`store::ContentStore`]). A build or serving cycle loads them once into a
//! [`snapshot::ContentSnapshot`], groups sell pages for the index
//! ([`grouping`]), derives related links ([`related`]) and JSON-LD
//! ([`structured_data`]), and renders HTML ([`render`]).

pub mod error;
/// Global FAQ list.
pub mod faq;
pub mod grouping;
/// Tracing setup shared by the binaries.
pub mod logging;
pub mod model;
pub mod pages;
pub mod related;
pub mod render;
/// Site-wide configuration.
pub mod site;
pub mod sitemap;
pub mod slug;
pub mod snapshot;
pub mod store;
pub mod structured_data;

pub use error::{ContentError, Result};
pub use faq::FaqList;
pub use model::{
    CategoryType, ContentRecord, Faq, FaqItem, Family, Guide, GuideCategory, GuideSection,
    QuestionAnswer, RelatedLink, SellPage,
};
pub use pages::StaticPage;
pub use site::SiteConfig;
pub use snapshot::ContentSnapshot;
pub use store::ContentStore;
