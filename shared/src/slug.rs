//! Identifier safety for slugs taken from request paths or file names.

use crate::error::{ContentError, Result};

/// Longest slug accepted by the resolver.
pub const MAX_SLUG_LEN: usize = 128;

/// Check that `raw` is a single, bare path segment.
///
/// Only ASCII letters, digits, `-` and `_` are allowed. That rules out path
/// separators, dots (and therefore `.` / `..`), NUL bytes and anything else a
/// filesystem might interpret. Validation happens before any storage access.
pub fn validate_slug(raw: &str) -> Result<&str> {
    if raw.is_empty() || raw.len() > MAX_SLUG_LEN {
        return Err(ContentError::InvalidSlug(raw.to_string()));
    }
    let ok = raw
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !ok {
        return Err(ContentError::InvalidSlug(raw.to_string()));
    }
    Ok(raw)
}

/// Convenience predicate over [`validate_slug`].
pub fn is_valid_slug(raw: &str) -> bool {
    validate_slug(raw).is_ok()
}
