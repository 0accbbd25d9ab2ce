//! Output formatting for listings, mandi prices, and comparisons (table, JSON, markdown, CSV).

use crate::compare::{ComparisonRow, ComparisonSummary};
use crate::config::OutputFormat;
use crate::market::{CropRecord, PriceRecord, RegionKey};
use serde::Serialize;

/// Formats marketplace data for output.
pub struct Formatter {
    format: OutputFormat,
}

#[derive(Serialize)]
struct RegionPrices<'a> {
    region: RegionKey,
    state: &'a str,
    prices: &'a [PriceRecord],
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    rows: &'a [ComparisonRow],
    summary: &'a ComparisonSummary,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats crop listings.
    pub fn format_crops(&self, crops: &[CropRecord]) -> String {
        if crops.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => Self::CROP_CSV_HEADER.to_string(),
                _ => "No crops found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => Self::json(crops, "[]"),
            OutputFormat::Table => self.table_crops(crops),
            OutputFormat::Markdown => self.markdown_crops(crops),
            OutputFormat::Csv => self.csv_crops(crops),
        }
    }

    /// Formats the mandi price list for a region.
    pub fn format_prices(&self, region: RegionKey, prices: &[PriceRecord]) -> String {
        match self.format {
            OutputFormat::Json => Self::json(
                &RegionPrices { region, state: region.display_name(), prices },
                "{}",
            ),
            OutputFormat::Table => self.table_prices(region, prices),
            OutputFormat::Markdown => self.markdown_prices(region, prices),
            OutputFormat::Csv => self.csv_prices(region, prices),
        }
    }

    /// Formats comparison rows followed by their summary.
    pub fn format_comparison(&self, rows: &[ComparisonRow], summary: &ComparisonSummary) -> String {
        match self.format {
            OutputFormat::Json => Self::json(&ComparisonReport { rows, summary }, "{}"),
            OutputFormat::Table => self.table_comparison(rows, summary),
            OutputFormat::Markdown => self.markdown_comparison(rows, summary),
            OutputFormat::Csv => self.csv_comparison(rows),
        }
    }

    /// Formats the list of supported regions.
    pub fn format_regions(&self, regions: &[RegionKey]) -> String {
        match self.format {
            OutputFormat::Json => Self::json(regions, "[]"),
            OutputFormat::Csv => {
                let mut lines = vec!["choice,key,state".to_string()];
                for (i, region) in regions.iter().enumerate() {
                    lines.push(format!("{},{},{}", i + 1, region, region.display_name()));
                }
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines = vec![
                    "| # | Key | State |".to_string(),
                    "|---|-----|-------|".to_string(),
                ];
                for (i, region) in regions.iter().enumerate() {
                    lines.push(format!("| {} | {} | {} |", i + 1, region, region.display_name()));
                }
                lines.join("\n")
            }
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("{:<3} {:<16} {}", "#", "Key", "State"),
                    format!("{:-<3} {:-<16} {:-<16}", "", "", ""),
                ];
                for (i, region) in regions.iter().enumerate() {
                    lines.push(format!("{:<3} {:<16} {}", i + 1, region, region.display_name()));
                }
                lines.join("\n")
            }
        }
    }

    // JSON formatting

    fn json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
    }

    // Table formatting

    fn table_crops(&self, crops: &[CropRecord]) -> String {
        let name_width = 22;
        let farmer_width = 14;
        let location_width = 26;
        let qty_width = 8;
        let quality_width = 18;
        let price_width = 10;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<name_width$}  {:<farmer_width$}  {:<location_width$}  {:<qty_width$}  {:<quality_width$}  {:>price_width$}  {:>price_width$}  {}",
            "Crop", "Farmer", "Location", "Qty", "Quality", "Middleman", "Direct", "Contact"
        ));
        lines.push(format!(
            "{:-<name_width$}  {:-<farmer_width$}  {:-<location_width$}  {:-<qty_width$}  {:-<quality_width$}  {:-<price_width$}  {:-<price_width$}  {:-<15}",
            "", "", "", "", "", "", "", ""
        ));

        for crop in crops {
            lines.push(format!(
                "{:<name_width$}  {:<farmer_width$}  {:<location_width$}  {:<qty_width$}  {:<quality_width$}  {:>price_width$}  {:>price_width$}  {}",
                truncate(&crop.name, name_width),
                truncate(&crop.farmer, farmer_width),
                truncate(&crop.location, location_width),
                crop.quantity,
                truncate(&crop.quality, quality_width),
                per_kg(crop.middleman_price_per_kg),
                per_kg(crop.direct_price_per_kg),
                crop.contact
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} crops", crops.len()));

        lines.join("\n")
    }

    fn table_prices(&self, region: RegionKey, prices: &[PriceRecord]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Mandi prices - {}", region.display_name()));
        lines.push(String::new());
        lines.push(format!("{:<20}{:<25}{}", "Crop", "Price Range", "Market"));
        lines.push("-".repeat(60));

        for price in prices {
            lines.push(format!(
                "{:<20}{:<25}{}",
                price.crop_name, price.price_range, price.market_name
            ));
        }

        lines.join("\n")
    }

    fn table_comparison(&self, rows: &[ComparisonRow], summary: &ComparisonSummary) -> String {
        let name_width = 22;
        let price_width = 13;
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<name_width$}{:<price_width$}{:<price_width$}{:<15}{:<15}{:<21}{}",
            "Crop Name",
            "Middleman",
            "Direct Sale",
            "Market Buyers",
            "Consumer Save",
            "Farmer Extra Income",
            "Best Option"
        ));
        lines.push("-".repeat(112));

        for row in rows {
            lines.push(format!(
                "{:<name_width$}{:<price_width$}{:<price_width$}{:<15}{:<15}{:<21}{}",
                truncate(&row.crop_name, name_width),
                per_kg(row.middleman_price),
                per_kg(row.direct_price),
                format!("₹{:.0}/kg", row.market_buyer_price),
                format!("₹{:.1}/kg", row.consumer_savings),
                format!("₹{:.1}/kg", row.farmer_extra_income),
                row.best_option
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Across {} crops: average consumer saving ₹{:.1}/kg, average farmer extra income ₹{:.1}/kg",
            summary.crops, summary.average_consumer_savings, summary.average_farmer_extra_income
        ));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_crops(&self, crops: &[CropRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| Crop | Farmer | Location | Quantity | Quality | Middleman | Direct | Contact |".to_string());
        lines.push("|------|--------|----------|----------|---------|-----------|--------|---------|".to_string());

        for crop in crops {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                crop.name,
                crop.farmer,
                crop.location,
                crop.quantity,
                crop.quality,
                per_kg(crop.middleman_price_per_kg),
                per_kg(crop.direct_price_per_kg),
                crop.contact
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} crops found*", crops.len()));

        lines.join("\n")
    }

    fn markdown_prices(&self, region: RegionKey, prices: &[PriceRecord]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## Mandi prices - {}", region.display_name()));
        lines.push(String::new());
        lines.push("| Crop | Price Range | Market |".to_string());
        lines.push("|------|-------------|--------|".to_string());

        for price in prices {
            lines.push(format!(
                "| {} | {} | {} |",
                price.crop_name, price.price_range, price.market_name
            ));
        }

        lines.join("\n")
    }

    fn markdown_comparison(&self, rows: &[ComparisonRow], summary: &ComparisonSummary) -> String {
        let mut lines = Vec::new();

        lines.push(
            "| Crop | Middleman | Direct Sale | Market Buyers | Consumer Save | Farmer Extra Income | Best Option |"
                .to_string(),
        );
        lines.push(
            "|------|-----------|-------------|---------------|---------------|---------------------|-------------|"
                .to_string(),
        );

        for row in rows {
            lines.push(format!(
                "| {} | {} | {} | ₹{:.0}/kg | ₹{:.1}/kg | ₹{:.1}/kg | **{}** |",
                row.crop_name,
                per_kg(row.middleman_price),
                per_kg(row.direct_price),
                row.market_buyer_price,
                row.consumer_savings,
                row.farmer_extra_income,
                row.best_option
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "*Average consumer saving ₹{:.1}/kg, average farmer extra income ₹{:.1}/kg across {} crops*",
            summary.average_consumer_savings, summary.average_farmer_extra_income, summary.crops
        ));

        lines.join("\n")
    }

    // CSV formatting

    const CROP_CSV_HEADER: &'static str =
        "name,farmer,location,quantity,quality,middleman_price_per_kg,direct_price_per_kg,contact";

    fn csv_crops(&self, crops: &[CropRecord]) -> String {
        let mut lines = vec![Self::CROP_CSV_HEADER.to_string()];

        for crop in crops {
            lines.push(format!(
                "{},{},{},{},{},{},{},{}",
                Self::csv_escape(&crop.name),
                Self::csv_escape(&crop.farmer),
                Self::csv_escape(&crop.location),
                Self::csv_escape(&crop.quantity),
                Self::csv_escape(&crop.quality),
                crop.middleman_price_per_kg,
                crop.direct_price_per_kg,
                Self::csv_escape(&crop.contact)
            ));
        }

        lines.join("\n")
    }

    fn csv_prices(&self, region: RegionKey, prices: &[PriceRecord]) -> String {
        let mut lines = vec!["region,crop,price_range,market".to_string()];

        for price in prices {
            lines.push(format!(
                "{},{},{},{}",
                region,
                Self::csv_escape(&price.crop_name),
                Self::csv_escape(&price.price_range),
                Self::csv_escape(&price.market_name)
            ));
        }

        lines.join("\n")
    }

    fn csv_comparison(&self, rows: &[ComparisonRow]) -> String {
        let mut lines = vec![
            "crop,middleman_price,direct_price,market_buyer_price,consumer_savings,farmer_extra_income,best_option"
                .to_string(),
        ];

        for row in rows {
            lines.push(format!(
                "{},{},{},{},{},{},{}",
                Self::csv_escape(&row.crop_name),
                row.middleman_price,
                row.direct_price,
                row.market_buyer_price,
                row.consumer_savings,
                row.farmer_extra_income,
                row.best_option
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn per_kg(price: f64) -> String {
    format!("₹{}/kg", price)
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{summarize, PriceComparisonEngine};
    use crate::market::{CropCatalog, RegionalPriceIndex};

    fn make_crop() -> CropRecord {
        CropRecord {
            name: "Premium Basmati Rice".to_string(),
            farmer: "Ramesh Kumar".to_string(),
            location: "Amritsar, Punjab".to_string(),
            quantity: "500 kg".to_string(),
            quality: "Grade A".to_string(),
            middleman_price_per_kg: 45.0,
            direct_price_per_kg: 85.0,
            contact: "+91-98765-43210".to_string(),
        }
    }

    fn comparison() -> (Vec<ComparisonRow>, ComparisonSummary) {
        let catalog = CropCatalog::new(vec![make_crop()]);
        let rows = PriceComparisonEngine::default().compare_all(&catalog);
        let summary = summarize(&rows);
        (rows, summary)
    }

    fn punjab() -> Vec<PriceRecord> {
        RegionalPriceIndex::seeded().prices_for_region(RegionKey::Punjab).to_vec()
    }

    // Crop listings

    #[test]
    fn test_json_crops() {
        let output = Formatter::new(OutputFormat::Json).format_crops(&[make_crop()]);
        assert!(output.starts_with('['));
        assert!(output.contains("\"name\": \"Premium Basmati Rice\""));
        assert!(output.contains("\"direct_price_per_kg\": 85.0"));
    }

    #[test]
    fn test_table_crops() {
        let output = Formatter::new(OutputFormat::Table).format_crops(&[make_crop()]);
        assert!(output.contains("Crop"));
        assert!(output.contains("Premium Basmati Rice"));
        assert!(output.contains("Amritsar, Punjab"));
        assert!(output.contains("₹45/kg"));
        assert!(output.contains("₹85/kg"));
        assert!(output.contains("+91-98765-43210"));
        assert!(output.contains("Total: 1 crops"));
    }

    #[test]
    fn test_table_crops_truncates_long_names() {
        let mut crop = make_crop();
        crop.name = "Extra Long Premium Aromatic Basmati Rice".to_string();
        let output = Formatter::new(OutputFormat::Table).format_crops(&[crop]);
        assert!(output.contains("Extra Long Premium ..."));
    }

    #[test]
    fn test_empty_crops_all_formats() {
        assert_eq!(Formatter::new(OutputFormat::Json).format_crops(&[]), "[]");
        assert_eq!(Formatter::new(OutputFormat::Table).format_crops(&[]), "No crops found.");
        assert_eq!(Formatter::new(OutputFormat::Markdown).format_crops(&[]), "No crops found.");
        assert!(Formatter::new(OutputFormat::Csv).format_crops(&[]).starts_with("name,farmer"));
    }

    #[test]
    fn test_markdown_crops() {
        let output = Formatter::new(OutputFormat::Markdown).format_crops(&[make_crop()]);
        assert!(output.contains("| Crop | Farmer |"));
        assert!(output.contains("| Premium Basmati Rice | Ramesh Kumar | Amritsar, Punjab |"));
        assert!(output.contains("*1 crops found*"));
    }

    #[test]
    fn test_csv_crops_escapes_location() {
        let output = Formatter::new(OutputFormat::Csv).format_crops(&[make_crop()]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "Premium Basmati Rice,Ramesh Kumar,\"Amritsar, Punjab\",500 kg,Grade A,45,85,+91-98765-43210"
        );
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(Formatter::csv_escape("simple"), "simple");
        assert_eq!(Formatter::csv_escape("with,comma"), "\"with,comma\"");
        assert_eq!(Formatter::csv_escape("with\"quote"), "\"with\"\"quote\"");
    }

    // Mandi prices

    #[test]
    fn test_table_prices() {
        let output = Formatter::new(OutputFormat::Table).format_prices(RegionKey::Punjab, &punjab());
        assert!(output.contains("Mandi prices - Punjab"));
        assert!(output.contains("Price Range"));
        let wheat = output.find("Ludhiana").unwrap();
        let cotton = output.find("Bathinda").unwrap();
        assert!(wheat < cotton);
    }

    #[test]
    fn test_json_prices() {
        let output = Formatter::new(OutputFormat::Json).format_prices(RegionKey::Punjab, &punjab());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["region"], "punjab");
        assert_eq!(value["state"], "Punjab");
        assert_eq!(value["prices"][2]["crop_name"], "Sugarcane");
        assert_eq!(value["prices"][2]["price_range"], "₹320-360/quintal");
    }

    #[test]
    fn test_markdown_and_csv_prices() {
        let md = Formatter::new(OutputFormat::Markdown).format_prices(RegionKey::Punjab, &punjab());
        assert!(md.contains("## Mandi prices - Punjab"));
        assert!(md.contains("| Wheat | ₹24-28/kg | Ludhiana |"));

        let csv = Formatter::new(OutputFormat::Csv).format_prices(RegionKey::Punjab, &punjab());
        assert!(csv.lines().any(|l| l == "punjab,Rice,₹26-30/kg,Amritsar"));
    }

    // Comparison

    #[test]
    fn test_table_comparison_rounding() {
        let (rows, summary) = comparison();
        let output = Formatter::new(OutputFormat::Table).format_comparison(&rows, &summary);
        assert!(output.contains("Farmer Extra Income"));
        assert!(output.contains("₹102/kg"));
        assert!(output.contains("₹-40.0/kg"));
        assert!(output.contains("₹17.0/kg"));
        assert!(output.contains("Market Buyers"));
        assert!(output.contains("Across 1 crops"));
    }

    #[test]
    fn test_json_comparison_full_precision() {
        let (rows, summary) = comparison();
        let output = Formatter::new(OutputFormat::Json).format_comparison(&rows, &summary);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["rows"][0]["consumer_savings"], -40.0);
        assert_eq!(value["rows"][0]["best_option"], "market-buyers");
        assert_eq!(value["summary"]["crops"], 1);
    }

    #[test]
    fn test_markdown_and_csv_comparison() {
        let (rows, summary) = comparison();
        let md = Formatter::new(OutputFormat::Markdown).format_comparison(&rows, &summary);
        assert!(md.contains("| Premium Basmati Rice | ₹45/kg | ₹85/kg | ₹102/kg | ₹-40.0/kg | ₹17.0/kg | **Market Buyers** |"));

        let csv = Formatter::new(OutputFormat::Csv).format_comparison(&rows, &summary);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Premium Basmati Rice,45,85,"));
        assert!(lines[1].ends_with(",Market Buyers"));
    }

    // Regions

    #[test]
    fn test_format_regions() {
        let table = Formatter::new(OutputFormat::Table).format_regions(RegionKey::all());
        assert!(table.contains("west-bengal"));
        assert!(table.contains("Uttar Pradesh"));

        let csv = Formatter::new(OutputFormat::Csv).format_regions(RegionKey::all());
        assert!(csv.lines().any(|l| l == "5,uttar-pradesh,Uttar Pradesh"));

        let json = Formatter::new(OutputFormat::Json).format_regions(RegionKey::all());
        assert!(json.contains("\"haryana\""));
    }
}
