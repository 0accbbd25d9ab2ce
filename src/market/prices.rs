//! Regional mandi price index.

use super::models::PriceRecord;
use super::regions::RegionKey;
use super::seed;
use crate::error::{MarketError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Per-state mandi price lists keyed by region.
#[derive(Debug, Clone)]
pub struct RegionalPriceIndex {
    table: HashMap<RegionKey, Vec<PriceRecord>>,
}

impl RegionalPriceIndex {
    /// Builds an index from the compiled-in price tables.
    pub fn seeded() -> Self {
        let table = RegionKey::all().iter().map(|&region| (region, seed::mandi_prices(region))).collect();
        Self { table }
    }

    /// Returns the closed set of valid region keys.
    pub fn region_keys(&self) -> &'static [RegionKey] {
        RegionKey::all()
    }

    /// Looks up prices by exact, case-sensitive region key.
    pub fn prices_for(&self, key: &str) -> Result<&[PriceRecord]> {
        let region = RegionKey::all()
            .iter()
            .find(|r| r.as_str() == key)
            .ok_or_else(|| MarketError::UnknownRegion { key: key.to_string() })?;

        debug!("Looking up mandi prices for {}", region);
        Ok(self.prices_for_region(*region))
    }

    /// Looks up prices for a known region.
    pub fn prices_for_region(&self, region: RegionKey) -> &[PriceRecord] {
        self.table.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for RegionalPriceIndex {
    fn default() -> Self {
        Self::seeded()
    }
}
