//! Free-text query helpers: Hindi crop terms and region detection.

use crate::market::RegionKey;

/// Hindi crop terms and their English search equivalents.
const HINDI_CROP_TERMS: &[(&str, &str)] = &[
    ("धान", "rice"),
    ("गेहूं", "wheat"),
    ("मक्का", "corn"),
    ("चावल", "rice"),
    ("सोयाबीन", "soybean"),
    ("आलू", "potato"),
    ("प्याज", "onion"),
    ("टमाटर", "tomato"),
    ("गन्ना", "sugarcane"),
    ("कपास", "cotton"),
    ("जौ", "barley"),
    ("बाजरा", "millet"),
    ("तिल", "sesame"),
    ("सरसों", "mustard"),
    ("हल्दी", "turmeric"),
    ("लहसुन", "garlic"),
    ("अदरक", "ginger"),
    ("मिर्च", "chili"),
    ("मूंगफली", "groundnut"),
    ("चना", "chickpea"),
];

/// Lowercases the query and replaces known Hindi crop terms with English ones.
pub fn translate_query(text: &str) -> String {
    HINDI_CROP_TERMS
        .iter()
        .fold(text.to_lowercase(), |acc, &(hindi, english)| acc.replace(hindi, english))
}

/// Returns the first region whose keyword appears in the text.
pub fn detect_region(text: &str) -> Option<RegionKey> {
    let text = text.to_lowercase();
    RegionKey::all()
        .iter()
        .copied()
        .find(|region| region.keywords().iter().any(|keyword| text.contains(keyword)))
}
