//! Listing filters with composable chains.

pub mod name;
pub mod price;

use crate::market::CropRecord;

pub use name::NameFilter;
pub use price::PriceFilter;

/// Trait for filtering crop listings.
pub trait Filter: Send + Sync {
    /// Returns true if the listing passes the filter.
    fn matches(&self, crop: &CropRecord) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a listing passes all filters.
    pub fn matches(&self, crop: &CropRecord) -> bool {
        self.filters.iter().all(|f| f.matches(crop))
    }

    /// Returns clones of the matching listings, preserving order.
    pub fn apply<'a>(&self, crops: impl IntoIterator<Item = &'a CropRecord>) -> Vec<CropRecord> {
        crops.into_iter().filter(|c| self.matches(c)).cloned().collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from command options.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a name substring filter.
    pub fn name_contains(mut self, term: Option<&str>) -> Self {
        if let Some(term) = term {
            self.chain.add(NameFilter::new(term));
        }
        self
    }

    /// Adds a direct price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_crop(name: &str, direct: f64) -> CropRecord {
        CropRecord::priced(name, direct / 2.0, direct)
    }

    #[test]
    fn test_filter_chain_new() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_filter_chain_default() {
        let chain = FilterChain::default();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_filter_chain() {
        let mut chain = FilterChain::new();
        chain.add(NameFilter::new("rice"));
        chain.add(PriceFilter::new(Some(50.0), Some(90.0)));

        assert_eq!(chain.len(), 2);

        assert!(chain.matches(&make_crop("Premium Basmati Rice", 85.0)));
        assert!(!chain.matches(&make_crop("Premium Basmati Rice", 95.0)));
        assert!(!chain.matches(&make_crop("Organic Wheat", 60.0)));
    }

    #[test]
    fn test_filter_chain_empty_matches_all() {
        let chain = FilterChain::new();
        assert!(chain.matches(&make_crop("Anything", 0.0)));
    }

    #[test]
    fn test_filter_chain_apply_preserves_order() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::new(Some(40.0), None));

        let crops = vec![
            make_crop("Sweet Corn", 60.0),
            make_crop("Fresh Onions", 35.0),
            make_crop("Organic Wheat", 50.0),
        ];

        let filtered = chain.apply(&crops);
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sweet Corn", "Organic Wheat"]);
    }

    #[test]
    fn test_filter_chain_descriptions() {
        let mut chain = FilterChain::new();
        chain.add(NameFilter::new("corn"));
        chain.add(PriceFilter::new(Some(10.0), Some(50.0)));

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions[0].contains("Name"));
        assert!(descriptions[1].contains("Direct price"));
    }

    #[test]
    fn test_filter_chain_builder() {
        let chain = FilterChainBuilder::new()
            .name_contains(Some("fresh"))
            .price_range(Some(10.0), Some(100.0))
            .build();

        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_filter_chain_builder_no_filters_when_disabled() {
        let chain = FilterChainBuilder::default().name_contains(None).price_range(None, None).build();
        assert!(chain.is_empty());
    }
}
