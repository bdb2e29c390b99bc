//! Error types for the content store.
//!
//! These errors stay inside the resolver. The page-facing lookups collapse
//! every variant into `None` so a missing slug and a corrupt record look the
//! same to the renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while resolving content from the store.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The identifier is not a single safe path segment.
    #[error("invalid slug {0:?}")]
    InvalidSlug(String),

    /// No record with this slug exists in the family.
    #[error("no {family} record for slug {slug:?}")]
    NotFound {
        /// Family directory name.
        family: &'static str,
        /// Requested slug.
        slug: String,
    },

    /// The content root does not exist or is not a directory.
    #[error("content root {0} is not a directory")]
    MissingRoot(PathBuf),

    /// Reading a file or directory failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A stored document is not valid JSON for its family schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the corrupt document.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the content crate.
pub type Result<T> = std::result::Result<T, ContentError>;
