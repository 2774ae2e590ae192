//! `sales-stream` runs lazy, single-pass pipelines over product sales data.
//!
//! The core is [`processing::Stream`], a generic pipeline that chains `map`, `filter`,
//! `distinct` and `sorted`, and ends in exactly one terminal operation: `group_by`, `reduce`
//! or `collect`. Only `sorted` and the terminal operations hold the whole upstream in memory;
//! everything else pulls one element at a time.
//!
//! Around the core:
//!
//! - [`ingestion`]: reads the product CSV lazily, cleaning prices, percentages, ratings and
//!   counts, and hands out a fresh stream per query via [`ingestion::CsvProductSource`]
//! - [`analysis`]: the sales report queries (key metrics, category ratings, top discounts,
//!   verified hits)
//! - [`report`]: text and JSON rendering of the report
//! - [`error`]: error types shared across the crate
//!
//! ## Quick example: query a CSV file
//!
//! ```no_run
//! use sales_stream::ingestion::CsvProductSource;
//! use sales_stream::processing::StreamSource;
//!
//! # fn main() -> Result<(), sales_stream::StreamError> {
//! let source = CsvProductSource::new("data/amazon.csv");
//!
//! // Each query opens its own stream: a drained stream cannot be reused.
//! let revenue = source.open()?.map(|p| p.discounted_price).reduce(0.0, |a, x| a + x)?;
//! let by_category = source.open()?.group_by(|p| p.category.clone())?;
//! println!("revenue={revenue:.2} categories={}", by_category.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Processing example
//!
//! ```rust
//! use ordered_float::OrderedFloat;
//! use sales_stream::processing::{SortOrder, Stream};
//! use sales_stream::types::Product;
//!
//! let products = vec![
//!     Product::new("Cable", "Electronics", 199.0, 999.0, 80.0, 4.3, 12_000),
//!     Product::new("Cable", "Electronics", 199.0, 999.0, 80.0, 4.3, 12_000),
//!     Product::new("Mug", "Home", 300.0, 400.0, 25.0, 4.6, 820),
//! ];
//!
//! let names = Stream::new(products)
//!     .filter(|p| p.discount_percentage > 0.0)
//!     .sorted(|p| OrderedFloat(p.discount_percentage), SortOrder::Descending)
//!     .distinct(|p| p.name.clone())
//!     .map(|p| p.name)
//!     .collect()
//!     .unwrap();
//! assert_eq!(names, vec!["Cable".to_string(), "Mug".to_string()]);
//! ```

pub mod analysis;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{IngestionError, IngestionResult, StreamError, StreamResult};
