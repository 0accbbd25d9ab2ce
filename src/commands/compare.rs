//! Price comparison command.

use crate::compare::{summarize, PriceComparisonEngine};
use crate::config::Config;
use crate::format::Formatter;
use crate::market::CropCatalog;
use tracing::{debug, info};

/// Compares middleman, direct, and bulk buyer economics for every listing.
pub struct CompareCommand {
    config: Config,
    catalog: CropCatalog,
}

impl CompareCommand {
    /// Creates a command over the seeded catalog.
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, CropCatalog::seeded())
    }

    /// Creates a command over a provided catalog (for testing).
    pub fn with_catalog(config: Config, catalog: CropCatalog) -> Self {
        Self { config, catalog }
    }

    /// Executes the comparison and returns formatted output.
    pub fn execute(&self) -> String {
        debug!("Best option policy: {}", self.config.best_option);

        let engine = PriceComparisonEngine::new(self.config.best_option);
        let rows = engine.compare_all(&self.catalog);
        let summary = summarize(&rows);

        info!("Compared {} crops", rows.len());
        Formatter::new(self.config.format).format_comparison(&rows, &summary)
    }
}
