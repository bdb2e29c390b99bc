//! Disk-backed content resolver.
//!
//! Layout under the content root:
//!
//! ```text
//! sell/<slug>.json
//! guides/<slug>.json
//! faq.json
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
    error::{ContentError, Result},
    faq::FaqList,
    model::{ContentRecord, Faq, Family},
    slug::{is_valid_slug, validate_slug},
};

const RECORD_EXTENSION: &str = "json";
const FAQ_FILE: &str = "faq.json";

/// Read-only view over a content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Open a store rooted at `root`. Fails if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ContentError::MissingRoot(root));
        }
        Ok(Self { root })
    }

    /// Content root this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn family_dir(&self, family: Family) -> PathBuf {
        self.root.join(family.dir_name())
    }

    /// Every slug stored for `family`, sorted.
    ///
    /// A missing family directory is treated as an empty family. File stems
    /// that are not valid slugs are skipped since no lookup could reach them.
    pub fn list_slugs(&self, family: Family) -> Result<Vec<String>> {
        let dir = self.family_dir(family);
        if !dir.exists() {
            tracing::warn!("Content directory for {} does not exist: {}", family, dir.display());
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|err| ContentError::io(&dir, err))?;
        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| ContentError::io(&dir, err))?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("Skipping non UTF-8 file name: {}", path.display());
                continue;
            };
            if !is_valid_slug(stem) {
                tracing::warn!("Skipping {}: file stem is not a valid slug", path.display());
                continue;
            }
            slugs.push(stem.to_string());
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Load one record and report why it could not be loaded.
    pub fn load_record<T: ContentRecord>(&self, slug: &str) -> Result<T> {
        let slug = validate_slug(slug)?;
        let path = self
            .family_dir(T::FAMILY)
            .join(format!("{slug}.{RECORD_EXTENSION}"));

        if !path.is_file() {
            return Err(ContentError::NotFound {
                family: T::FAMILY.dir_name(),
                slug: slug.to_string(),
            });
        }

        let mut record: T = read_json(&path)?;
        if !record.slug().is_empty() && record.slug() != slug {
            tracing::warn!(
                "{} declares slug {:?}; using the file name {:?}",
                path.display(),
                record.slug(),
                slug
            );
        }
        // The file name is the only slug that has been validated.
        *record.slug_mut() = slug.to_string();
        Ok(record)
    }

    /// Look up one record. Malformed slugs, absent files and corrupt
    /// documents all come back as `None`.
    pub fn get_record<T: ContentRecord>(&self, slug: &str) -> Option<T> {
        match self.load_record(slug) {
            Ok(record) => Some(record),
            Err(err @ (ContentError::InvalidSlug(_) | ContentError::NotFound { .. })) => {
                tracing::debug!("{err}");
                None
            },
            Err(err) => {
                tracing::warn!("{err}");
                None
            },
        }
    }

    /// Every record of the family that loads, in [`Self::list_slugs`] order.
    pub fn list_all_records<T: ContentRecord>(&self) -> Result<Vec<T>> {
        Ok(self
            .list_slugs(T::FAMILY)?
            .iter()
            .filter_map(|slug| self.get_record(slug))
            .collect())
    }

    /// Load the global FAQ list in authored order.
    ///
    /// A missing or corrupt `faq.json` yields an empty list.
    pub fn load_faqs(&self) -> FaqList {
        let path = self.root.join(FAQ_FILE);
        if !path.is_file() {
            tracing::warn!("FAQ list not found at {}", path.display());
            return FaqList::default();
        }
        match read_json::<Vec<Faq>>(&path) {
            Ok(faqs) => FaqList::new(faqs),
            Err(err) => {
                tracing::warn!("{err}");
                FaqList::default()
            },
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|err| ContentError::io(path, err))?;
    serde_json::from_str(&raw).map_err(|err| ContentError::parse(path, err))
}
