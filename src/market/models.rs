//! Data models for crop listings and mandi prices.

use serde::{Deserialize, Serialize};

/// A single marketplace listing offered by a farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Crop name as listed
    pub name: String,
    /// Farmer offering the crop
    pub farmer: String,
    /// Free-form "locality, state"
    pub location: String,
    /// Quantity with unit, e.g. "500 kg"
    pub quantity: String,
    /// Quality grade
    pub quality: String,
    /// Price per kg when sold through a middleman
    pub middleman_price_per_kg: f64,
    /// Price per kg when sold directly to a consumer
    pub direct_price_per_kg: f64,
    /// Contact phone number
    pub contact: String,
}

impl CropRecord {
    /// Creates a listing with the given name and prices; the remaining fields are empty.
    pub fn priced(name: impl Into<String>, middleman: f64, direct: f64) -> Self {
        Self {
            name: name.into(),
            farmer: String::new(),
            location: String::new(),
            quantity: String::new(),
            quality: String::new(),
            middleman_price_per_kg: middleman,
            direct_price_per_kg: direct,
            contact: String::new(),
        }
    }
}

/// A regional reference price quoted at a mandi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Crop the price applies to
    pub crop_name: String,
    /// Pre-formatted range, e.g. "₹25-30/kg"; never parsed
    pub price_range: String,
    /// Market town quoting the price
    pub market_name: String,
}

impl PriceRecord {
    /// Creates a new price record.
    pub fn new(
        crop_name: impl Into<String>,
        price_range: impl Into<String>,
        market_name: impl Into<String>,
    ) -> Self {
        Self {
            crop_name: crop_name.into(),
            price_range: price_range.into(),
            market_name: market_name.into(),
        }
    }
}
