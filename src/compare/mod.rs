//! Middleman vs direct sale vs bulk buyer price comparison.

use crate::market::{CropCatalog, CropRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bulk buyers pay this multiple of the direct-to-consumer price.
pub const MARKET_BUYER_PREMIUM: f64 = 1.2;

/// Ways a farmer can sell a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaleChannel {
    Middleman,
    DirectSale,
    MarketBuyers,
}

impl SaleChannel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SaleChannel::Middleman => "Middleman",
            SaleChannel::DirectSale => "Direct Sale",
            SaleChannel::MarketBuyers => "Market Buyers",
        }
    }
}

impl fmt::Display for SaleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the recommended channel is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BestOptionPolicy {
    /// Always recommend market buyers.
    #[default]
    Fixed,
    /// Recommend whichever channel pays the farmer the most per kg.
    HighestFarmerPrice,
}

impl FromStr for BestOptionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(BestOptionPolicy::Fixed),
            "highest-farmer-price" | "highest" => Ok(BestOptionPolicy::HighestFarmerPrice),
            _ => Err(format!("Unknown best-option policy: {}. Use: fixed, highest-farmer-price", s)),
        }
    }
}

impl fmt::Display for BestOptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BestOptionPolicy::Fixed => write!(f, "fixed"),
            BestOptionPolicy::HighestFarmerPrice => write!(f, "highest-farmer-price"),
        }
    }
}

/// Derived economics for one listing. All prices are ₹ per kg at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub crop_name: String,
    pub middleman_price: f64,
    pub direct_price: f64,
    pub market_buyer_price: f64,
    /// Consumer saving from buying direct; negative when middleman < direct
    pub consumer_savings: f64,
    /// Extra farmer income from selling to a bulk buyer instead of direct
    pub farmer_extra_income: f64,
    pub best_option: SaleChannel,
}

/// Averages over a set of comparison rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub crops: usize,
    pub average_consumer_savings: f64,
    pub average_farmer_extra_income: f64,
}

/// Derives comparison rows from catalog listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceComparisonEngine {
    policy: BestOptionPolicy,
}

impl PriceComparisonEngine {
    /// Creates an engine using the given recommendation policy.
    pub fn new(policy: BestOptionPolicy) -> Self {
        Self { policy }
    }

    /// Returns one row per listing, in catalog order.
    pub fn compare_all(&self, catalog: &CropCatalog) -> Vec<ComparisonRow> {
        catalog.list_all().iter().map(|crop| self.compare(crop)).collect()
    }

    /// Derives the comparison row for a single listing.
    pub fn compare(&self, crop: &CropRecord) -> ComparisonRow {
        let middleman = crop.middleman_price_per_kg;
        let direct = crop.direct_price_per_kg;
        let market_buyer = direct * MARKET_BUYER_PREMIUM;

        ComparisonRow {
            crop_name: crop.name.clone(),
            middleman_price: middleman,
            direct_price: direct,
            market_buyer_price: market_buyer,
            consumer_savings: middleman - direct,
            farmer_extra_income: market_buyer - direct,
            best_option: self.best_option(middleman, direct, market_buyer),
        }
    }

    fn best_option(&self, middleman: f64, direct: f64, market_buyer: f64) -> SaleChannel {
        match self.policy {
            BestOptionPolicy::Fixed => SaleChannel::MarketBuyers,
            BestOptionPolicy::HighestFarmerPrice => {
                // Earlier entries win ties.
                let candidates = [
                    (SaleChannel::MarketBuyers, market_buyer),
                    (SaleChannel::DirectSale, direct),
                    (SaleChannel::Middleman, middleman),
                ];
                let mut best = candidates[0];
                for candidate in &candidates[1..] {
                    if candidate.1 > best.1 {
                        best = *candidate;
                    }
                }
                best.0
            }
        }
    }
}

/// Averages consumer savings and farmer extra income across rows.
pub fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
    if rows.is_empty() {
        return ComparisonSummary {
            crops: 0,
            average_consumer_savings: 0.0,
            average_farmer_extra_income: 0.0,
        };
    }

    let n = rows.len() as f64;
    ComparisonSummary {
        crops: rows.len(),
        average_consumer_savings: rows.iter().map(|r| r.consumer_savings).sum::<f64>() / n,
        average_farmer_extra_income: rows.iter().map(|r| r.farmer_extra_income).sum::<f64>() / n,
    }
}
