//! Direct price range filter.

use super::Filter;
use crate::market::CropRecord;

/// Filters listings by direct-to-consumer price per kg.
pub struct PriceFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceFilter {
    /// Creates a new price filter with optional min/max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Creates a filter with only minimum price.
    pub fn min(price: f64) -> Self {
        Self { min: Some(price), max: None }
    }

    /// Creates a filter with only maximum price.
    pub fn max(price: f64) -> Self {
        Self { min: None, max: Some(price) }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, crop: &CropRecord) -> bool {
        let price = crop.direct_price_per_kg;

        if let Some(min) = self.min {
            if price < min {
                return false;
            }
        }

        if let Some(max) = self.max {
            if price > max {
                return false;
            }
        }

        true
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Direct price: ₹{:.2} - ₹{:.2}/kg", min, max),
            (Some(min), None) => format!("Direct price: >= ₹{:.2}/kg", min),
            (None, Some(max)) => format!("Direct price: <= ₹{:.2}/kg", max),
            (None, None) => "Direct price: any".to_string(),
        }
    }
}
