//! Crop listing catalog.

use super::models::CropRecord;
use super::seed;
use crate::filters::{FilterChain, NameFilter};
use tracing::debug;

/// Ordered collection of marketplace listings.
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<CropRecord>,
}

impl CropCatalog {
    /// Creates a catalog from listings, keeping their order.
    pub fn new(crops: Vec<CropRecord>) -> Self {
        Self { crops }
    }

    /// Builds the catalog from the compiled-in listings.
    pub fn seeded() -> Self {
        Self::new(seed::crops())
    }

    /// Returns every listing in catalog order.
    pub fn list_all(&self) -> &[CropRecord] {
        &self.crops
    }

    /// Returns listings whose name contains `term`, ignoring case.
    ///
    /// An empty term matches every listing. No matches yields an empty vector.
    pub fn search(&self, term: &str) -> Vec<CropRecord> {
        let mut chain = FilterChain::new();
        chain.add(NameFilter::new(term));

        let results = self.filter(&chain);
        debug!("Search '{}' matched {} of {} listings", term, results.len(), self.crops.len());
        results
    }

    /// Returns listings passing every filter in the chain, in catalog order.
    pub fn filter(&self, chain: &FilterChain) -> Vec<CropRecord> {
        chain.apply(&self.crops)
    }

    /// Returns the number of listings.
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Returns true if the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
