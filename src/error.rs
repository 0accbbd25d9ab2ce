//! Error types for marketplace lookups.

use thiserror::Error;

/// Errors raised by the marketplace core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Region key outside the enumerated set.
    #[error(
        "Unknown region '{key}'. Valid regions: west-bengal, telangana, punjab, haryana, uttar-pradesh"
    )]
    UnknownRegion { key: String },
}

pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_region_display() {
        let err = MarketError::UnknownRegion { key: "kerala".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("'kerala'"));
        assert!(msg.contains("uttar-pradesh"));
    }
}
