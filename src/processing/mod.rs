//! Lazy, single-pass stream pipelines.
//!
//! A [`Stream`] wraps a producer of elements and exposes chainable operations:
//!
//! - intermediate, lazy: [`Stream::map`], [`Stream::try_map`], [`Stream::filter`],
//!   [`Stream::try_filter`], [`Stream::distinct`]
//! - intermediate, materializing: [`Stream::sorted`]
//! - terminal: [`Stream::group_by`], [`Stream::reduce`], [`Stream::collect`]
//!
//! Intermediate operations return a new [`Stream`]; terminal operations return a
//! [`StreamResult`] holding a plain value. Nothing is pulled from the source until a terminal
//! operation runs (except for `sorted`, which has to see every element before it can yield one).
//!
//! ## Single-pass sources
//!
//! Every operation takes the source out of the stream it is called on, leaving that stream
//! *consumed*. A terminal operation on a consumed stream fails with
//! [`StreamError::ExhaustedSource`] instead of returning an empty result. Independent queries
//! should each open their own stream from a [`StreamSource`].
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use sales_stream::processing::Stream;
//!
//! let total = Stream::new(vec![1, 2, 3, 4, 5])
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * 10)
//!     .reduce(0, |acc, n| acc + n)
//!     .unwrap();
//! assert_eq!(total, 90);
//! ```
//!
//! ## Example: misuse of a drained stream
//!
//! ```rust
//! use sales_stream::processing::Stream;
//!
//! let mut numbers = Stream::new(vec![1, 2, 3]);
//! let mut doubled = numbers.map(|n| n * 2);
//! assert_eq!(doubled.collect().unwrap(), vec![2, 4, 6]);
//! assert!(numbers.collect().unwrap_err().is_exhausted());
//! assert!(doubled.collect().unwrap_err().is_exhausted());
//! ```

pub mod filter;
pub mod groups;
pub mod map;
pub mod reduce;
pub mod sort;
pub mod source;

use std::fmt;
use std::mem;

use crate::error::{StreamError, StreamResult};

pub use groups::Groups;
pub use sort::SortOrder;
pub use source::StreamSource;

/// Boxed, pull-based producer behind a [`Stream`].
pub(crate) type Source<T> = Box<dyn Iterator<Item = StreamResult<T>>>;

enum State<T> {
    Active(Source<T>),
    Consumed,
}

/// A lazy pipeline over a finite, single-pass sequence of `T`.
pub struct Stream<T> {
    state: State<T>,
}

impl<T: 'static> Stream<T> {
    /// Wrap an infallible sequence. Nothing is evaluated yet.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_source(Box::new(source.into_iter().map(Ok::<T, StreamError>)))
    }

    /// Wrap a fallible sequence; an `Err` element aborts the terminal operation that pulls it.
    pub fn from_results<I, E>(source: I) -> Self
    where
        I: IntoIterator<Item = Result<T, E>>,
        I::IntoIter: 'static,
        E: Into<StreamError> + 'static,
    {
        Self::from_source(Box::new(
            source
                .into_iter()
                .map(|item| -> StreamResult<T> { item.map_err(Into::into) }),
        ))
    }

    /// An active stream with no elements.
    pub fn empty() -> Self {
        Self::from_source(Box::new(std::iter::empty::<StreamResult<T>>()))
    }

    /// Returns `true` once an operation has taken this stream's source.
    pub fn is_consumed(&self) -> bool {
        matches!(self.state, State::Consumed)
    }

    pub(crate) fn from_source(source: Source<T>) -> Self {
        Self {
            state: State::Active(source),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            state: State::Consumed,
        }
    }

    /// Take the source out, leaving this stream consumed.
    pub(crate) fn take_source(&mut self) -> StreamResult<Source<T>> {
        match mem::replace(&mut self.state, State::Consumed) {
            State::Active(source) => Ok(source),
            State::Consumed => Err(StreamError::ExhaustedSource),
        }
    }

    /// Build the next lazy stage on top of this stream's source.
    ///
    /// On a consumed stream the stage is never built and the returned stream is consumed too,
    /// so the misuse surfaces at the terminal operation.
    pub(crate) fn chain<U, S>(&mut self, stage: S) -> Stream<U>
    where
        U: 'static,
        S: FnOnce(Source<T>) -> Source<U>,
    {
        match self.take_source() {
            Ok(source) => Stream::from_source(stage(source)),
            Err(_) => Stream::consumed(),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Active(_) => "active",
            State::Consumed => "consumed",
        };
        f.debug_struct("Stream").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Stream;
    use crate::error::{IngestionError, StreamError};

    #[test]
    fn new_stream_is_active_until_an_operation_runs() {
        let mut s = Stream::new(vec![1, 2, 3]);
        assert!(!s.is_consumed());
        let _ = s.collect().unwrap();
        assert!(s.is_consumed());
    }

    #[test]
    fn intermediate_operation_consumes_the_parent() {
        let mut s = Stream::new(vec![1, 2, 3]);
        let child = s.map(|n| n + 1);
        assert!(s.is_consumed());
        assert!(!child.is_consumed());
    }

    #[test]
    fn operations_on_consumed_stream_report_exhausted_source() {
        let mut s = Stream::new(vec![1, 2, 3]);
        let _ = s.collect().unwrap();

        let mut child = s.filter(|n| *n > 1);
        assert!(child.is_consumed());
        assert!(matches!(child.collect(), Err(StreamError::ExhaustedSource)));
        assert!(matches!(s.reduce(0, |a, n| a + n), Err(StreamError::ExhaustedSource)));
        assert!(matches!(s.group_by(|n| *n), Err(StreamError::ExhaustedSource)));
    }

    #[test]
    fn construction_is_lazy() {
        use std::cell::Cell;
        use std::rc::Rc;

        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let source = (0..5).inspect(move |_| counter.set(counter.get() + 1));

        let mut s = Stream::new(source).map(|n| n * 2).filter(|n| *n > 2);
        assert_eq!(pulled.get(), 0);
        assert_eq!(s.collect().unwrap(), vec![4, 6, 8]);
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn source_errors_surface_at_the_terminal_operation() {
        let items: Vec<Result<i32, IngestionError>> = vec![
            Ok(1),
            Err(IngestionError::Io(std::io::Error::other("disk gone"))),
            Ok(3),
        ];
        let err = Stream::from_results(items).collect().unwrap_err();
        assert!(matches!(err, StreamError::Ingestion(IngestionError::Io(_))));
    }

    #[test]
    fn empty_stream_yields_identity_results() {
        assert_eq!(Stream::<f64>::empty().reduce(0.0, |a, x| a + x).unwrap(), 0.0);
        assert!(Stream::<i32>::empty().collect().unwrap().is_empty());
        assert!(Stream::<i32>::empty().group_by(|n| *n).unwrap().is_empty());
    }

    #[test]
    fn debug_shows_state() {
        let mut s = Stream::new(vec![1]);
        assert_eq!(format!("{s:?}"), "Stream { state: \"active\" }");
        let _ = s.collect();
        assert_eq!(format!("{s:?}"), "Stream { state: \"consumed\" }");
    }
}
