//! Compiled-in marketplace listings and mandi price tables.

use super::models::{CropRecord, PriceRecord};
use super::regions::RegionKey;

type CropRow = (&'static str, &'static str, &'static str, &'static str, &'static str, f64, f64, &'static str);

const CROPS: &[CropRow] = &[
    ("Premium Basmati Rice", "Ramesh Kumar", "Amritsar, Punjab", "500 kg", "Grade A", 45.0, 85.0, "+91-98765-43210"),
    ("Organic Wheat", "Suresh Patel", "Indore, Madhya Pradesh", "2000 kg", "Organic Certified", 25.0, 50.0, "+91-98765-43211"),
    ("Fresh Onions", "Mahesh Singh", "Nashik, Maharashtra", "1000 kg", "Premium", 15.0, 35.0, "+91-98765-43212"),
    ("Sweet Corn", "Rajesh Verma", "Shimla, Himachal Pradesh", "300 kg", "Fresh Harvest", 30.0, 60.0, "+91-98765-43213"),
    ("Premium Soybeans", "Dinesh Gupta", "Bhopal, Madhya Pradesh", "1500 kg", "Grade A", 40.0, 70.0, "+91-98765-43214"),
    ("Fresh Tomatoes", "Anil Sharma", "Pune, Maharashtra", "800 kg", "Grade A", 25.0, 50.0, "+91-98765-43215"),
];

type PriceRow = (&'static str, &'static str, &'static str);

const WEST_BENGAL: &[PriceRow] = &[
    ("Rice", "₹25-30/kg", "Kolkata"),
    ("Wheat", "₹22-26/kg", "Siliguri"),
    ("Potato", "₹15-20/kg", "Hooghly"),
    ("Onion", "₹18-25/kg", "Burdwan"),
];

const TELANGANA: &[PriceRow] = &[
    ("Rice", "₹28-32/kg", "Hyderabad"),
    ("Cotton", "₹5800-6200/quintal", "Warangal"),
    ("Maize", "₹18-22/kg", "Nizamabad"),
    ("Turmeric", "₹85-95/kg", "Nalgonda"),
];

const PUNJAB: &[PriceRow] = &[
    ("Wheat", "₹24-28/kg", "Ludhiana"),
    ("Rice", "₹26-30/kg", "Amritsar"),
    ("Sugarcane", "₹320-360/quintal", "Jalandhar"),
    ("Cotton", "₹5900-6300/quintal", "Bathinda"),
];

const HARYANA: &[PriceRow] = &[
    ("Wheat", "₹23-27/kg", "Karnal"),
    ("Rice", "₹25-29/kg", "Kurukshetra"),
    ("Mustard", "₹55-65/kg", "Sirsa"),
    ("Barley", "₹18-22/kg", "Hisar"),
];

const UTTAR_PRADESH: &[PriceRow] = &[
    ("Wheat", "₹22-26/kg", "Meerut"),
    ("Sugarcane", "₹280-320/quintal", "Lucknow"),
    ("Potato", "₹12-18/kg", "Agra"),
    ("Rice", "₹24-28/kg", "Varanasi"),
];

/// Builds the seeded crop listings in display order.
pub fn crops() -> Vec<CropRecord> {
    CROPS
        .iter()
        .map(|&(name, farmer, location, quantity, quality, middleman, direct, contact)| CropRecord {
            name: name.to_string(),
            farmer: farmer.to_string(),
            location: location.to_string(),
            quantity: quantity.to_string(),
            quality: quality.to_string(),
            middleman_price_per_kg: middleman,
            direct_price_per_kg: direct,
            contact: contact.to_string(),
        })
        .collect()
}

/// Builds the seeded mandi price list for one region.
pub fn mandi_prices(region: RegionKey) -> Vec<PriceRecord> {
    let rows = match region {
        RegionKey::WestBengal => WEST_BENGAL,
        RegionKey::Telangana => TELANGANA,
        RegionKey::Punjab => PUNJAB,
        RegionKey::Haryana => HARYANA,
        RegionKey::UttarPradesh => UTTAR_PRADESH,
    };

    rows.iter().map(|&(crop, range, market)| PriceRecord::new(crop, range, market)).collect()
}
