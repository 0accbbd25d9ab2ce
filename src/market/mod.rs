//! Marketplace data: listings, mandi prices, and their seed tables.

pub mod catalog;
pub mod models;
pub mod prices;
pub mod regions;
pub mod seed;

pub use catalog::CropCatalog;
pub use models::{CropRecord, PriceRecord};
pub use prices::RegionalPriceIndex;
pub use regions::RegionKey;
