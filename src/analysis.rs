//! The product sales report queries.
//!
//! Each query opens its own stream from a [`StreamSource`], since a stream can only be drained
//! once. The results are plain values; rendering lives in [`crate::report`].

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::StreamResult;
use crate::processing::{SortOrder, Stream, StreamSource};
use crate::types::Product;

/// Tunables for the report queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Number of products listed in the ranked sections.
    pub top_n: usize,
    /// Verified hits must have a rating strictly above this.
    pub min_rating: f64,
    /// Verified hits must have strictly more ratings than this.
    pub min_rating_count: u64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            min_rating: 4.5,
            min_rating_count: 1000,
        }
    }
}

/// Dataset-wide money totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyMetrics {
    /// Sum of discounted prices.
    pub total_revenue: f64,
    /// Sum of `actual_price - discounted_price`.
    pub total_savings: f64,
}

/// Average rating of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRating {
    pub category: String,
    pub average_rating: f64,
    pub product_count: usize,
}

/// Everything the report prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub metrics: KeyMetrics,
    pub categories: Vec<CategoryRating>,
    pub top_discounts: Vec<Product>,
    pub verified_hits: Vec<Product>,
}

/// Total revenue and total customer savings (map → reduce, one stream each).
pub fn key_metrics<S: StreamSource<Product>>(source: &S) -> StreamResult<KeyMetrics> {
    let total_revenue = source
        .open()?
        .map(|p| p.discounted_price)
        .reduce(0.0, |acc, x| acc + x)?;
    let total_savings = source
        .open()?
        .map(|p| p.savings())
        .reduce(0.0, |acc, x| acc + x)?;

    Ok(KeyMetrics {
        total_revenue,
        total_savings,
    })
}

/// Average rating per category, highest first. Ties keep category discovery order.
pub fn category_ratings<S: StreamSource<Product>>(source: &S) -> StreamResult<Vec<CategoryRating>> {
    let groups = source.open()?.group_by(|p| p.category.clone())?;

    let ratings: Vec<CategoryRating> = groups
        .into_iter()
        .filter(|(_, products)| !products.is_empty())
        .map(|(category, products)| CategoryRating {
            average_rating: products.iter().map(|p| p.rating).sum::<f64>() / products.len() as f64,
            product_count: products.len(),
            category,
        })
        .collect();

    Stream::new(ratings)
        .sorted(|c| OrderedFloat(c.average_rating), SortOrder::Descending)
        .collect()
}

/// The `top_n` most discounted products, one per product name.
pub fn top_discounts<S: StreamSource<Product>>(source: &S, top_n: usize) -> StreamResult<Vec<Product>> {
    let mut products = source
        .open()?
        .filter(|p| p.discount_percentage > 0.0)
        .sorted(|p| OrderedFloat(p.discount_percentage), SortOrder::Descending)
        .distinct(|p| p.name.clone())
        .collect()?;
    products.truncate(top_n);
    Ok(products)
}

/// Highly rated products with many reviews, most reviewed first, one per product name.
pub fn verified_hits<S: StreamSource<Product>>(source: &S, options: &ReportOptions) -> StreamResult<Vec<Product>> {
    let min_rating = options.min_rating;
    let min_rating_count = options.min_rating_count;

    let mut products = source
        .open()?
        .filter(move |p| p.rating > min_rating && p.rating_count > min_rating_count)
        .sorted(|p| p.rating_count, SortOrder::Descending)
        .distinct(|p| p.name.clone())
        .collect()?;
    products.truncate(options.top_n);
    Ok(products)
}

/// Run every query, each against a freshly opened stream.
pub fn build_report<S: StreamSource<Product>>(source: &S, options: &ReportOptions) -> StreamResult<SalesReport> {
    Ok(SalesReport {
        metrics: key_metrics(source)?,
        categories: category_ratings(source)?,
        top_discounts: top_discounts(source, options.top_n)?,
        verified_hits: verified_hits(source, options)?,
    })
}
