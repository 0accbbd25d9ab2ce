//! Mandi price lookup command.

use crate::config::Config;
use crate::format::Formatter;
use crate::market::{RegionKey, RegionalPriceIndex};
use anyhow::Result;
use tracing::info;

/// Looks up mandi prices for a region.
pub struct PricesCommand {
    config: Config,
    index: RegionalPriceIndex,
}

impl PricesCommand {
    /// Creates a new prices command.
    pub fn new(config: Config) -> Self {
        Self { config, index: RegionalPriceIndex::seeded() }
    }

    /// Resolves user input to a region key.
    ///
    /// Accepts a menu number (1-5), a state name or city alias, or a canonical
    /// key. Anything else is passed through unchanged so the index reports it.
    pub fn resolve_key(input: &str) -> String {
        let input = input.trim();
        if let Ok(choice) = input.parse::<usize>() {
            if let Some(region) = RegionKey::from_menu_choice(choice) {
                return region.as_str().to_string();
            }
        }

        match input.parse::<RegionKey>() {
            Ok(region) => region.as_str().to_string(),
            Err(_) => input.to_string(),
        }
    }

    /// Executes the lookup and returns formatted output.
    pub fn execute(&self, region: &str) -> Result<String> {
        let key = Self::resolve_key(region);
        let prices = self.index.prices_for(&key)?;

        // prices_for only succeeds for canonical keys
        let region: RegionKey = key.parse()?;
        info!("Found {} mandi prices for {}", prices.len(), region.display_name());

        Ok(Formatter::new(self.config.format).format_prices(region, prices))
    }

    /// Lists the supported regions.
    pub fn regions(&self) -> String {
        Formatter::new(self.config.format).format_regions(self.index.region_keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::MarketError;

    fn make_cmd() -> PricesCommand {
        PricesCommand::new(Config { format: OutputFormat::Csv, ..Config::default() })
    }

    #[test]
    fn test_resolve_key() {
        assert_eq!(PricesCommand::resolve_key("1"), "west-bengal");
        assert_eq!(PricesCommand::resolve_key("5"), "uttar-pradesh");
        assert_eq!(PricesCommand::resolve_key("Uttar Pradesh"), "uttar-pradesh");
        assert_eq!(PricesCommand::resolve_key("hyderabad"), "telangana");
        assert_eq!(PricesCommand::resolve_key("punjab"), "punjab");
        assert_eq!(PricesCommand::resolve_key("9"), "9");
        assert_eq!(PricesCommand::resolve_key("kerala"), "kerala");
    }

    #[test]
    fn test_execute_by_key() {
        let output = make_cmd().execute("west-bengal").unwrap();
        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(
            rows,
            vec![
                "west-bengal,Rice,₹25-30/kg,Kolkata",
                "west-bengal,Wheat,₹22-26/kg,Siliguri",
                "west-bengal,Potato,₹15-20/kg,Hooghly",
                "west-bengal,Onion,₹18-25/kg,Burdwan",
            ]
        );
    }

    #[test]
    fn test_execute_by_menu_choice() {
        let output = make_cmd().execute("2").unwrap();
        assert!(output.contains("telangana,Turmeric,₹85-95/kg,Nalgonda"));
    }

    #[test]
    fn test_execute_unknown_region() {
        let err = make_cmd().execute("not-a-region").unwrap_err();
        let market_err = err.downcast_ref::<MarketError>().unwrap();
        assert_eq!(*market_err, MarketError::UnknownRegion { key: "not-a-region".to_string() });
    }

    #[test]
    fn test_regions() {
        let output = make_cmd().regions();
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("1,west-bengal,West Bengal"));
    }
}
