//! Contextual "Related" links for sell pages.
//!
//! A computed block is always one parent category link followed by two
//! high-authority peers from the same coarse group, never linking back to the
//! page itself. On a category page (the parent link would be a self link) the
//! block is three peers instead.

use crate::model::{CategoryType, RelatedLink, SellPage};

/// Number of links in a computed block.
pub const RELATED_LINK_COUNT: usize = 3;

/// Coarse grouping used to pick the peer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    /// Wine and champagne.
    Wine,
    /// Every spirit.
    Spirits,
}

impl CategoryType {
    /// Coarse group for peer clustering.
    pub fn group(self) -> CategoryGroup {
        match self {
            CategoryType::Wine | CategoryType::Champagne => CategoryGroup::Wine,
            CategoryType::Bourbon
            | CategoryType::Scotch
            | CategoryType::JapaneseWhisky
            | CategoryType::Cognac
            | CategoryType::Spirits
            | CategoryType::Other => CategoryGroup::Spirits,
        }
    }

    /// Parent category link as `(label, href)`.
    ///
    /// Cognac has no index page, so its flagship page stands in for one.
    pub fn parent_link(self) -> (&'static str, &'static str) {
        match self {
            CategoryType::Wine | CategoryType::Champagne => ("Sell Wine", "/sell/wine"),
            CategoryType::Bourbon => ("Sell Bourbon", "/sell/bourbon"),
            CategoryType::Scotch => ("Sell Scotch", "/sell/scotch"),
            CategoryType::JapaneseWhisky => ("Sell Japanese Whisky", "/sell/japanese-whisky"),
            CategoryType::Cognac => ("Sell Cognac", "/sell/louis-xiii"),
            CategoryType::Spirits | CategoryType::Other => ("Sell Scotch", "/sell/scotch"),
        }
    }
}

const WINE_PEERS: [(&str, &str); 5] = [
    ("Screaming Eagle", "/sell/screaming-eagle"),
    ("Petrus", "/sell/petrus"),
    ("Harlan Estate", "/sell/harlan-estate"),
    ("Opus One", "/sell/opus-one"),
    ("DRC", "/sell/domaine-de-la-romanee-conti"),
];

const SPIRITS_PEERS: [(&str, &str); 5] = [
    ("Macallan", "/sell/macallan"),
    ("Pappy Van Winkle", "/sell/van-winkle"),
    ("Yamazaki", "/sell/yamazaki"),
    ("Hibiki", "/sell/hibiki"),
    ("Buffalo Trace Antique Collection", "/sell/btac"),
];

impl CategoryGroup {
    /// Hand-curated peers for the group, in preference order.
    pub fn peers(self) -> &'static [(&'static str, &'static str)] {
        match self {
            CategoryGroup::Wine => &WINE_PEERS,
            CategoryGroup::Spirits => &SPIRITS_PEERS,
        }
    }
}

fn targets(href: &str, slug: &str) -> bool {
    href.ends_with(&format!("/{slug}"))
}

/// Compute the related block for a page of `category_type` at `current_slug`.
pub fn compute_related_links(category_type: CategoryType, current_slug: &str) -> Vec<RelatedLink> {
    let (parent_label, parent_href) = category_type.parent_link();
    let peers = category_type
        .group()
        .peers()
        .iter()
        .filter(|(_, href)| !targets(href, current_slug))
        .map(|(label, href)| RelatedLink::new(*label, *href));

    if targets(parent_href, current_slug) {
        return peers.take(RELATED_LINK_COUNT).collect();
    }

    std::iter::once(RelatedLink::new(parent_label, parent_href))
        .chain(peers.take(RELATED_LINK_COUNT - 1))
        .collect()
}

/// Related links to render for `page`: authored links verbatim when present,
/// otherwise [`compute_related_links`].
pub fn related_links(page: &SellPage) -> Vec<RelatedLink> {
    if !page.related_links.is_empty() {
        return page.related_links.clone();
    }
    compute_related_links(page.category_type, &page.slug)
}
