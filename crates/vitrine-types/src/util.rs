use serde::de::DeserializeOwned;
use std::path::Path;

use crate::api::{Document, Listing};
use crate::Result;

/// Parse a storefront document, unwrapping an `ApiResponse` envelope if present
pub fn from_json_str<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let doc: Document<T> = serde_json::from_str(raw)?;
    Ok(doc.into_inner())
}

/// Read and parse a storefront document from disk
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)?;
    from_json_str(&raw)
}

/// Read a collection that may be a bare array, a page, or either inside an envelope
pub fn load_listing<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let listing: Listing<T> = load_json(path)?;
    Ok(listing.into_vec())
}

/// Truncate a string to a maximum number of characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
