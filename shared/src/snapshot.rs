//! Immutable in-memory copy of the content store.
//!
//! One snapshot is loaded per build or serving cycle and shared by reference.
//! Lookups never touch the filesystem again, so resolving the same slug
//! repeatedly always yields the same record.

use std::collections::HashMap;

use crate::{
    error::Result,
    faq::FaqList,
    model::{ContentRecord, Family, Guide, SellPage},
    slug::is_valid_slug,
    store::ContentStore,
};

/// One family's records in slug order with an index for lookups.
#[derive(Debug, Clone)]
struct Collection<T> {
    slugs: Vec<String>,
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            slugs: Vec::new(),
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: ContentRecord> Collection<T> {
    fn load(store: &ContentStore) -> Result<Self> {
        let slugs = store.list_slugs(T::FAMILY)?;
        let mut records = Vec::with_capacity(slugs.len());
        let mut index = HashMap::with_capacity(slugs.len());
        for slug in &slugs {
            if let Some(record) = store.get_record::<T>(slug) {
                index.insert(slug.clone(), records.len());
                records.push(record);
            }
        }
        Ok(Self {
            slugs,
            records,
            index,
        })
    }

    fn get(&self, slug: &str) -> Option<&T> {
        if !is_valid_slug(slug) {
            return None;
        }
        self.index.get(slug).map(|&i| &self.records[i])
    }
}

/// Every record of every family, loaded once.
#[derive(Debug, Clone, Default)]
pub struct ContentSnapshot {
    sell: Collection<SellPage>,
    guides: Collection<Guide>,
    faqs: FaqList,
}

impl ContentSnapshot {
    /// Read the whole store.
    pub fn load(store: &ContentStore) -> Result<Self> {
        let snapshot = Self {
            sell: Collection::load(store)?,
            guides: Collection::load(store)?,
            faqs: store.load_faqs(),
        };
        tracing::info!(
            "Loaded content snapshot from {}: {} sell pages, {} guides, {} FAQs",
            store.root().display(),
            snapshot.sell.records.len(),
            snapshot.guides.records.len(),
            snapshot.faqs.len()
        );
        Ok(snapshot)
    }

    /// Build a snapshot from records already in memory.
    pub fn from_records(sell: Vec<SellPage>, guides: Vec<Guide>, faqs: FaqList) -> Self {
        fn collect<T: ContentRecord>(records: Vec<T>) -> Collection<T> {
            let mut collection = Collection::default();
            for record in records {
                let slug = record.slug().to_string();
                if !is_valid_slug(&slug) {
                    tracing::warn!("Dropping {} record with invalid slug {slug:?}", T::FAMILY);
                    continue;
                }
                if collection.index.contains_key(&slug) {
                    tracing::warn!("Duplicate slug {slug:?} in {}; keeping the first", T::FAMILY);
                    continue;
                }
                collection.index.insert(slug.clone(), collection.records.len());
                collection.slugs.push(slug);
                collection.records.push(record);
            }
            collection
        }

        Self {
            sell: collect(sell),
            guides: collect(guides),
            faqs,
        }
    }

    /// Slugs present in the store for `family`, including ones whose
    /// document failed to parse.
    pub fn list_slugs(&self, family: Family) -> &[String] {
        match family {
            Family::Sell => &self.sell.slugs,
            Family::Guide => &self.guides.slugs,
        }
    }

    /// Look up a sell page.
    pub fn get_sell(&self, slug: &str) -> Option<&SellPage> {
        self.sell.get(slug)
    }

    /// Look up a guide.
    pub fn get_guide(&self, slug: &str) -> Option<&Guide> {
        self.guides.get(slug)
    }

    /// All sell pages that loaded, in slug order.
    pub fn sell_pages(&self) -> &[SellPage] {
        &self.sell.records
    }

    /// All guides that loaded, in slug order.
    pub fn guides(&self) -> &[Guide] {
        &self.guides.records
    }

    /// The global FAQ list.
    pub fn faqs(&self) -> &FaqList {
        &self.faqs
    }

    /// Slugs listed for `family` whose record could not be loaded.
    pub fn unreadable_slugs(&self, family: Family) -> Vec<&str> {
        let loaded = |slug: &str| match family {
            Family::Sell => self.sell.index.contains_key(slug),
            Family::Guide => self.guides.index.contains_key(slug),
        };
        self.list_slugs(family)
            .iter()
            .map(String::as_str)
            .filter(|slug| !loaded(*slug))
            .collect()
    }
}
