//! Listing and search commands over the crop catalog.

use crate::config::Config;
use crate::filters::FilterChainBuilder;
use crate::format::Formatter;
use crate::market::{CropCatalog, RegionalPriceIndex};
use crate::query::{detect_region, translate_query};
use tracing::{debug, info};

/// Lists and searches marketplace listings.
pub struct CatalogCommand {
    config: Config,
    catalog: CropCatalog,
}

impl CatalogCommand {
    /// Creates a command over the seeded catalog.
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, CropCatalog::seeded())
    }

    /// Creates a command over a provided catalog (for testing).
    pub fn with_catalog(config: Config, catalog: CropCatalog) -> Self {
        Self { config, catalog }
    }

    /// Lists every listing passing the configured price bounds.
    pub fn list(&self) -> String {
        let filters = FilterChainBuilder::new()
            .price_range(self.config.min_price, self.config.max_price)
            .build();

        let crops = if filters.is_empty() {
            self.catalog.list_all().to_vec()
        } else {
            debug!("Active filters: {}", filters.descriptions().join(", "));
            self.catalog.filter(&filters)
        };

        info!("Listing {} of {} crops", crops.len(), self.catalog.len());
        Formatter::new(self.config.format).format_crops(&crops)
    }

    /// Searches listings by name and returns formatted output.
    ///
    /// With no matches, the output says so and, if the query names a region,
    /// appends that region's mandi prices.
    pub fn search(&self, query: &str) -> String {
        let term = if self.config.translate_hindi {
            let translated = translate_query(query);
            debug!("Translated query '{}' to '{}'", query, translated);
            translated
        } else {
            query.to_string()
        };

        info!("Searching for: {}", term);
        let results = self.catalog.search(&term);
        let formatter = Formatter::new(self.config.format);

        if !results.is_empty() {
            return formatter.format_crops(&results);
        }

        let mut output = format!("No crops found matching '{}'.", term);
        if let Some(region) = detect_region(query) {
            debug!("Query mentions {}, suggesting mandi prices", region);
            let index = RegionalPriceIndex::seeded();
            output.push_str("\n\n");
            output.push_str(&formatter.format_prices(region, index.prices_for_region(region)));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::market::CropRecord;

    fn make_test_config() -> Config {
        Config { format: OutputFormat::Csv, ..Config::default() }
    }

    fn data_rows(output: &str) -> Vec<&str> {
        output.lines().skip(1).collect()
    }

    #[test]
    fn test_list_all() {
        let cmd = CatalogCommand::new(make_test_config());
        let output = cmd.list();
        let rows = data_rows(&output);
        assert_eq!(rows.len(), 6);
        assert!(rows[0].starts_with("Premium Basmati Rice,"));
        assert!(rows[5].starts_with("Fresh Tomatoes,"));
    }

    #[test]
    fn test_list_with_price_bounds() {
        let mut config = make_test_config();
        config.max_price = Some(50.0);

        let output = CatalogCommand::new(config).list();
        let rows = data_rows(&output);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().any(|r| r.starts_with("Organic Wheat,")));
        assert!(!output.contains("Premium Basmati Rice"));
    }

    #[test]
    fn test_search_matches() {
        let cmd = CatalogCommand::new(make_test_config());
        let output = cmd.search("FRESH");
        let rows = data_rows(&output);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Fresh Onions,"));
        assert!(rows[1].starts_with("Fresh Tomatoes,"));
    }

    #[test]
    fn test_search_no_match() {
        let cmd = CatalogCommand::new(make_test_config());
        assert_eq!(cmd.search("mango"), "No crops found matching 'mango'.");
    }

    #[test]
    fn test_search_no_match_suggests_region_prices() {
        let cmd = CatalogCommand::new(make_test_config());
        let output = cmd.search("mustard haryana");
        assert!(output.starts_with("No crops found matching 'mustard haryana'."));
        assert!(output.contains("haryana,Mustard,₹55-65/kg,Sirsa"));
    }

    #[test]
    fn test_search_translates_hindi_when_enabled() {
        let mut config = make_test_config();
        config.translate_hindi = true;
        let output = CatalogCommand::new(config).search("टमाटर");
        assert!(output.contains("Fresh Tomatoes"));

        let output = CatalogCommand::new(make_test_config()).search("टमाटर");
        assert!(output.starts_with("No crops found"));
    }

    #[test]
    fn test_search_custom_catalog() {
        let catalog = CropCatalog::new(vec![CropRecord::priced("Green Chili", 80.0, 60.0)]);
        let cmd = CatalogCommand::with_catalog(make_test_config(), catalog);
        assert_eq!(data_rows(&cmd.search("chili")).len(), 1);
        assert_eq!(data_rows(&cmd.search("")).len(), 1);
    }
}
