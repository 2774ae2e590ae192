//! Rendering of a [`SalesReport`] as console text or JSON.

use std::io::{self, Write};

use crate::analysis::{ReportOptions, SalesReport};

const RULE_WIDTH: usize = 50;
const DISCOUNT_NAME_CHARS: usize = 50;
const HIT_NAME_CHARS: usize = 60;

/// Write the human-readable report.
pub fn write_text<W: Write>(out: &mut W, report: &SalesReport, options: &ReportOptions) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, " AMAZON PRODUCT STREAM ANALYSIS ")?;
    writeln!(out, "{rule}")?;

    writeln!(out)?;
    writeln!(out, "[1] KEY FINANCIAL METRICS")?;
    writeln!(out, "   > Total Revenue:     ₹{}", format_currency(report.metrics.total_revenue))?;
    writeln!(out, "   > Customer Savings:  ₹{}", format_currency(report.metrics.total_savings))?;

    writeln!(out)?;
    writeln!(out, "[2] AVERAGE RATING BY CATEGORY")?;
    for c in &report.categories {
        writeln!(
            out,
            "   > {:<25} : {:.2} stars ({} items)",
            c.category, c.average_rating, c.product_count
        )?;
    }

    writeln!(out)?;
    writeln!(out, "[3] TOP {} MOST DISCOUNTED PRODUCTS", options.top_n)?;
    for p in &report.top_discounts {
        writeln!(
            out,
            "   > {}% off: {}...",
            p.discount_percentage,
            truncate_chars(&p.name, DISCOUNT_NAME_CHARS)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "[4] VERIFIED HITS (>{} Stars, >{} Reviews)",
        options.min_rating, options.min_rating_count
    )?;
    if report.verified_hits.is_empty() {
        writeln!(out, "   > No products matched criteria")?;
    }
    for p in &report.verified_hits {
        writeln!(
            out,
            "   > [{}★ | {} reviews] {}...",
            p.rating,
            p.rating_count,
            truncate_chars(&p.name, HIT_NAME_CHARS)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Render the report as pretty-printed JSON.
pub fn to_json(report: &SalesReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Format an amount with two decimals and `,` thousands separators, e.g. `1,234,567.89`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// The first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
