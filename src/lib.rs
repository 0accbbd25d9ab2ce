//! kisan-connect - Farmer marketplace browser
//!
//! Crop listings, regional mandi prices, and a middleman vs direct sale vs
//! bulk buyer price comparison, all served from compiled-in seed data.

pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod market;
pub mod query;

pub use compare::{BestOptionPolicy, ComparisonRow, PriceComparisonEngine, SaleChannel};
pub use config::Config;
pub use error::MarketError;
pub use market::{CropCatalog, CropRecord, PriceRecord, RegionKey, RegionalPriceIndex};
