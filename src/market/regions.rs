//! Region keys for mandi price lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// States with published mandi price lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKey {
    WestBengal,
    Telangana,
    Punjab,
    Haryana,
    UttarPradesh,
}

impl RegionKey {
    /// Returns the canonical lowercase hyphenated key.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKey::WestBengal => "west-bengal",
            RegionKey::Telangana => "telangana",
            RegionKey::Punjab => "punjab",
            RegionKey::Haryana => "haryana",
            RegionKey::UttarPradesh => "uttar-pradesh",
        }
    }

    /// Returns the human-readable state name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RegionKey::WestBengal => "West Bengal",
            RegionKey::Telangana => "Telangana",
            RegionKey::Punjab => "Punjab",
            RegionKey::Haryana => "Haryana",
            RegionKey::UttarPradesh => "Uttar Pradesh",
        }
    }

    /// Free-text keywords that identify this region (state names, major cities).
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RegionKey::WestBengal => &["west bengal", "bengal", "kolkata", "पश्चिम बंगाल"],
            RegionKey::Telangana => &["telangana", "hyderabad", "तेलंगाना", "हैदराबाद"],
            RegionKey::Punjab => &["punjab", "amritsar", "ludhiana", "पंजाब"],
            RegionKey::Haryana => &["haryana", "karnal", "हरियाणा"],
            RegionKey::UttarPradesh => &["uttar pradesh", "lucknow", "meerut", "उत्तर प्रदेश"],
        }
    }

    /// Maps a 1-based menu choice to a region.
    pub fn from_menu_choice(choice: usize) -> Option<RegionKey> {
        choice.checked_sub(1).and_then(|idx| Self::all().get(idx).copied())
    }

    /// Returns all regions in menu order.
    pub fn all() -> &'static [RegionKey] {
        &[
            RegionKey::WestBengal,
            RegionKey::Telangana,
            RegionKey::Punjab,
            RegionKey::Haryana,
            RegionKey::UttarPradesh,
        ]
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionKey {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "west-bengal" | "west bengal" | "bengal" | "wb" | "kolkata" => Ok(RegionKey::WestBengal),
            "telangana" | "ts" | "hyderabad" => Ok(RegionKey::Telangana),
            "punjab" | "pb" | "amritsar" | "ludhiana" => Ok(RegionKey::Punjab),
            "haryana" | "hr" | "karnal" => Ok(RegionKey::Haryana),
            "uttar-pradesh" | "uttar pradesh" | "up" | "lucknow" | "meerut" => {
                Ok(RegionKey::UttarPradesh)
            }
            _ => Err(RegionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegionParseError(String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown region '{}'. Valid regions: west-bengal, telangana, punjab, haryana, uttar-pradesh",
            self.0
        )
    }
}

impl std::error::Error for RegionParseError {}
