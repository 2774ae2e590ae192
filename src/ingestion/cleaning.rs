//! Lenient parsers for the raw text fields of the product CSV.
//!
//! The dataset is scraped and dirty: prices carry a currency sign and thousands separators,
//! ratings sometimes carry trailing junk after a `|`. Every helper maps missing, empty or
//! unparseable input to zero rather than failing the row.

/// Category used when the `category` column is absent.
pub const DEFAULT_CATEGORY: &str = "Others";

/// Name used when the `product_name` column is absent.
pub const DEFAULT_NAME: &str = "Unknown";

const CURRENCY_SIGN: char = '₹';

/// Parse a price such as `"₹1,099"` or `"₹ 1,200.50 "`.
pub fn clean_currency(raw: Option<&str>) -> f64 {
    non_empty(raw)
        .and_then(|s| s.replace([CURRENCY_SIGN, ','], "").trim().parse().ok())
        .unwrap_or(0.0)
}

/// Parse a percentage such as `"64%"` or `" 12 % "`.
pub fn clean_percentage(raw: Option<&str>) -> f64 {
    non_empty(raw)
        .and_then(|s| s.replace('%', "").trim().parse().ok())
        .unwrap_or(0.0)
}

/// Parse a rating such as `"4.5"` or `"4.5|12345"`; only the part before the first `|` counts.
pub fn clean_rating(raw: Option<&str>) -> f64 {
    non_empty(raw)
        .and_then(|s| s.split('|').next())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Parse a count such as `"24,269"`.
pub fn clean_count(raw: Option<&str>) -> u64 {
    non_empty(raw)
        .and_then(|s| s.replace(',', "").trim().parse().ok())
        .unwrap_or(0)
}

/// First segment of a `|`-separated category path, e.g. `"Electronics|Cables"` → `"Electronics"`.
pub fn primary_category(raw: Option<&str>) -> String {
    match raw {
        Some(s) => s.split('|').next().unwrap_or(s).to_owned(),
        None => DEFAULT_CATEGORY.to_owned(),
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}
