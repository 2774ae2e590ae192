use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Error type returned by ingestion functions.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. permission denied, truncated read).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not exist.
    #[error("data file not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Structural CSV error (unbalanced quotes, bad UTF-8, ...) on a given data row.
    #[error("csv error at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

impl From<csv::Error> for IngestionError {
    fn from(source: csv::Error) -> Self {
        // Header-level failures have no data row yet.
        IngestionError::Csv { row: 1, source }
    }
}

/// Error type returned by [`crate::processing::Stream`] terminal operations.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A terminal operation was invoked on a stream whose source was already drained.
    #[error("stream source already consumed; open a fresh source for each query")]
    ExhaustedSource,

    /// A fallible caller function failed on the element at `index` within its stage.
    #[error("transform failed at element {index}: {source}")]
    Transform {
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },

    /// The source produced an ingestion error while being pulled.
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
}

impl StreamError {
    /// Wrap an arbitrary caller error as a [`StreamError::Transform`].
    pub fn transform<E>(index: usize, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        StreamError::Transform {
            index,
            source: source.into(),
        }
    }

    /// Returns `true` if this is a misuse of an already consumed stream.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, StreamError::ExhaustedSource)
    }
}
