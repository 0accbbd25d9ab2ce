//! Case-insensitive name substring filter.

use super::Filter;
use crate::market::CropRecord;

/// Matches listings whose name contains a term, ignoring case.
///
/// Only case is folded: whitespace and punctuation are significant, and an
/// empty term matches every listing.
pub struct NameFilter {
    term: String,
}

impl NameFilter {
    /// Creates a new name filter.
    pub fn new(term: impl AsRef<str>) -> Self {
        Self { term: term.as_ref().to_lowercase() }
    }

    /// Returns the lowercased term.
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl Filter for NameFilter {
    fn matches(&self, crop: &CropRecord) -> bool {
        crop.name.to_lowercase().contains(&self.term)
    }

    fn description(&self) -> String {
        format!("Name contains: '{}'", self.term)
    }
}
