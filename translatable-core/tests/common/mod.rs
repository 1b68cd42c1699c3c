//! Shared helpers for the integration tests.

use std::path::PathBuf;
use translatable_core::FilterList;

/// The Markdown the canonical HTML fixture must convert to.
pub const CANONICAL_MARKDOWN: &str =
    "![drawing](https://cdn.door43.org/assets/uw-icons/logo-obs-256.png) # unfoldingWord® Open Bible Stories";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn no_filters() -> FilterList {
    FilterList::default()
}

mod ir;
