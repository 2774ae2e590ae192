//! Ingestion of the product sales CSV.
//!
//! Most callers should use [`CsvProductSource`] (from [`source`]) which:
//!
//! - opens a fresh, lazy [`crate::processing::Stream`] of [`crate::types::Product`]s per query
//! - cleans the raw text fields (currency, percentages, ratings, counts, category paths)
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Lower-level pieces are available under:
//! - [`cleaning`]
//! - [`csv`]

pub mod cleaning;
pub mod csv;
pub mod observability;
pub mod source;

pub use observability::{
    severity_for_error, CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity,
    IngestionStats, StdErrObserver,
};
pub use source::{open_products, CsvProductSource, IngestionOptions};
