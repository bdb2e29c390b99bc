//! Index-page buckets for sell pages and guides.

use crate::model::{CategoryType, Guide, GuideCategory, SellPage};

/// Display section on the "What We Buy" index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryBucket {
    /// Bourbon and American whiskey.
    Bourbon,
    /// Scotch and Japanese whisky, plus every other spirit.
    Scotch,
    /// Wine and champagne.
    WineAndChampagne,
}

impl CategoryBucket {
    /// Sections in index order.
    pub const ORDERED: [CategoryBucket; 3] =
        [CategoryBucket::Bourbon, CategoryBucket::Scotch, CategoryBucket::WineAndChampagne];

    /// Stable bucket key.
    pub fn key(self) -> &'static str {
        match self {
            CategoryBucket::Bourbon => "bourbon",
            CategoryBucket::Scotch => "scotch",
            CategoryBucket::WineAndChampagne => "wine-and-champagne",
        }
    }

    /// Section heading.
    pub fn heading(self) -> &'static str {
        match self {
            CategoryBucket::Bourbon => "Bourbon and American Whiskey",
            CategoryBucket::Scotch => "Scotch and Japanese Whisky",
            CategoryBucket::WineAndChampagne => "Wine and Champagne",
        }
    }

    /// Section lead-in copy.
    pub fn blurb(self) -> &'static str {
        match self {
            CategoryBucket::Bourbon => {
                "We buy allocated and collectible bourbon including Van Winkle, Buffalo Trace \
                 Antique Collection, Blanton's, Weller, and other limited releases. Single \
                 bottles and collections are both welcome."
            },
            CategoryBucket::Scotch => {
                "We buy rare single malts, limited editions, and aged expressions from \
                 distilleries including Macallan, Springbank, Ardbeg, and Lagavulin. We also \
                 purchase collectible Japanese whisky from Yamazaki, Hibiki, and other producers."
            },
            CategoryBucket::WineAndChampagne => {
                "We buy fine and rare wine from Bordeaux, Burgundy, Napa, and Champagne, from \
                 single bottles to full cellars."
            },
        }
    }
}

impl CategoryType {
    /// Index bucket for this category.
    ///
    /// Spirits without a dedicated section share the scotch section.
    pub fn bucket(self) -> CategoryBucket {
        match self {
            CategoryType::Bourbon => CategoryBucket::Bourbon,
            CategoryType::Wine | CategoryType::Champagne => CategoryBucket::WineAndChampagne,
            CategoryType::Scotch
            | CategoryType::JapaneseWhisky
            | CategoryType::Cognac
            | CategoryType::Spirits
            | CategoryType::Other => CategoryBucket::Scotch,
        }
    }
}

/// Sell pages split into their display buckets, input order kept.
#[derive(Debug, Default)]
pub struct CategoryGroups<'a> {
    /// Bourbon section.
    pub bourbon: Vec<&'a SellPage>,
    /// Scotch / Japanese whisky / other spirits section.
    pub scotch: Vec<&'a SellPage>,
    /// Wine and champagne section.
    pub wine_and_champagne: Vec<&'a SellPage>,
}

impl<'a> CategoryGroups<'a> {
    /// Pages in one bucket.
    pub fn get(&self, bucket: CategoryBucket) -> &[&'a SellPage] {
        match bucket {
            CategoryBucket::Bourbon => &self.bourbon,
            CategoryBucket::Scotch => &self.scotch,
            CategoryBucket::WineAndChampagne => &self.wine_and_champagne,
        }
    }

    /// Buckets with their pages in index order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryBucket, &[&'a SellPage])> + '_ {
        CategoryBucket::ORDERED
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    /// Total number of grouped pages.
    pub fn len(&self) -> usize {
        self.bourbon.len() + self.scotch.len() + self.wine_and_champagne.len()
    }

    /// True when no page was grouped.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition sell pages by [`CategoryType::bucket`]. Every page lands in
/// exactly one bucket.
pub fn group_by_category<'a, I>(records: I) -> CategoryGroups<'a>
where
    I: IntoIterator<Item = &'a SellPage>,
{
    let mut groups = CategoryGroups::default();
    for page in records {
        match page.category_type.bucket() {
            CategoryBucket::Bourbon => groups.bourbon.push(page),
            CategoryBucket::Scotch => groups.scotch.push(page),
            CategoryBucket::WineAndChampagne => groups.wine_and_champagne.push(page),
        }
    }
    groups
}

/// Guides grouped by category in [`GuideCategory::ORDERED`] order. Categories
/// without guides are omitted.
pub fn group_guides_by_category<'a, I>(guides: I) -> Vec<(GuideCategory, Vec<&'a Guide>)>
where
    I: IntoIterator<Item = &'a Guide>,
{
    let guides: Vec<&Guide> = guides.into_iter().collect();
    GuideCategory::ORDERED
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&Guide> =
                guides.iter().copied().filter(|g| g.category == category).collect();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}
