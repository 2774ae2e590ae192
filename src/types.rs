//! Core record type flowing through product streams.
//!
//! A [`Product`] is produced by [`crate::ingestion`] from one CSV row, after its raw fields were
//! cleaned into numbers. Records are never mutated once built.

use serde::Serialize;

/// A single product entry of the sales dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Product display name.
    pub name: String,
    /// Primary category (first segment of a `|`-separated category path).
    pub category: String,
    /// Price after discount.
    pub discounted_price: f64,
    /// List price before discount.
    pub actual_price: f64,
    /// Discount in percent, nominally 0–100.
    pub discount_percentage: f64,
    /// Average user rating, nominally 0–5.
    pub rating: f64,
    /// Number of ratings behind [`Product::rating`].
    pub rating_count: u64,
}

impl Product {
    /// Create a new product.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        discounted_price: f64,
        actual_price: f64,
        discount_percentage: f64,
        rating: f64,
        rating_count: u64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            discounted_price,
            actual_price,
            discount_percentage,
            rating,
            rating_count,
        }
    }

    /// Absolute amount saved by buying at the discounted price.
    pub fn savings(&self) -> f64 {
        self.actual_price - self.discounted_price
    }
}
