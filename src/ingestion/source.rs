//! Re-openable product sources.
//!
//! Most callers should use [`CsvProductSource`], which opens a fresh [`Stream`] of products
//! from a CSV file every time [`StreamSource::open`] is called.
//!
//! - If [`IngestionOptions::observer`] is set, failures (and the row count of fully drained
//!   streams) are reported to it.
//! - If [`IngestionOptions::allow_missing`] is set, a missing file yields an empty stream instead
//!   of an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult, StreamResult};
use crate::processing::{Stream, StreamSource};
use crate::types::Product;

use super::csv::read_products_from_path;
use super::observability::{
    report_failure, severity_for_error, IngestionContext, IngestionObserver, IngestionSeverity,
    IngestionStats,
};

/// Options controlling how product sources are opened.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
    /// Treat a missing data file as an empty source (reported as a warning).
    pub allow_missing: bool,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("allow_missing", &self.allow_missing)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
            allow_missing: false,
        }
    }
}

/// Open a lazy stream of products from a CSV file.
///
/// Only the header row is read here; data rows are read as the stream is pulled.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` once the stream is drained, with the row count
/// - `on_failure` on failure (opening or any row), with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use sales_stream::ingestion::{open_products, IngestionOptions, StdErrObserver};
///
/// # fn main() -> Result<(), sales_stream::StreamError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let revenue = open_products("data/amazon.csv", &opts)?
///     .map(|p| p.discounted_price)
///     .reduce(0.0, |acc, x| acc + x)?;
/// println!("revenue={revenue:.2}");
/// # Ok(())
/// # }
/// ```
pub fn open_products(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<Stream<Product>> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    match read_products_from_path(path) {
        Ok(records) => Ok(match options.observer.clone() {
            Some(observer) => Stream::from_results(ObservedRecords {
                inner: records,
                observer,
                ctx,
                alert_at_or_above: options.alert_at_or_above,
                rows: 0,
                done: false,
            }),
            None => Stream::from_results(records),
        }),
        Err(e @ IngestionError::MissingSource { .. }) if options.allow_missing => {
            if let Some(observer) = options.observer.as_deref() {
                report_failure(observer, &ctx, IngestionSeverity::Warning, options.alert_at_or_above, &e);
            }
            Ok(Stream::empty())
        }
        Err(e) => {
            if let Some(observer) = options.observer.as_deref() {
                report_failure(observer, &ctx, severity_for_error(&e), options.alert_at_or_above, &e);
            }
            Err(e)
        }
    }
}

/// Wraps a record iterator and reports its outcome to an observer.
struct ObservedRecords<I> {
    inner: I,
    observer: Arc<dyn IngestionObserver>,
    ctx: IngestionContext,
    alert_at_or_above: IngestionSeverity,
    rows: usize,
    done: bool,
}

impl<I> Iterator for ObservedRecords<I>
where
    I: Iterator<Item = IngestionResult<Product>>,
{
    type Item = IngestionResult<Product>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(product)) => {
                self.rows += 1;
                Some(Ok(product))
            }
            Some(Err(e)) => {
                // The terminal operation aborts on this error; report it once.
                self.done = true;
                report_failure(
                    &*self.observer,
                    &self.ctx,
                    severity_for_error(&e),
                    self.alert_at_or_above,
                    &e,
                );
                Some(Err(e))
            }
            None => {
                self.done = true;
                self.observer
                    .on_success(&self.ctx, IngestionStats { rows: self.rows });
                None
            }
        }
    }
}

/// A [`StreamSource`] of products backed by a CSV file.
///
/// Each [`StreamSource::open`] re-opens the file, so independent queries never share reading
/// state.
#[derive(Debug, Clone)]
pub struct CsvProductSource {
    path: PathBuf,
    options: IngestionOptions,
}

impl CsvProductSource {
    /// Create a source for `path` with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, IngestionOptions::default())
    }

    /// Create a source for `path` with the given options.
    pub fn with_options(path: impl Into<PathBuf>, options: IngestionOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Path of the underlying CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StreamSource<Product> for CsvProductSource {
    fn open(&self) -> StreamResult<Stream<Product>> {
        Ok(open_products(&self.path, &self.options)?)
    }
}
