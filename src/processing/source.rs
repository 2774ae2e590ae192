//! Factories for fresh streams.

use crate::error::StreamResult;

use super::Stream;

/// Something that can open a brand-new, independent [`Stream`] on every call.
///
/// Streams are single-pass, so every independent query should call [`StreamSource::open`]
/// instead of sharing one stream. Closures returning `StreamResult<Stream<T>>` implement this
/// trait, which is handy for in-memory data:
///
/// ```rust
/// use sales_stream::processing::{Stream, StreamSource};
/// use sales_stream::StreamResult;
///
/// let data = vec![1, 2, 3];
/// let source = move || -> StreamResult<Stream<i32>> { Ok(Stream::new(data.clone())) };
///
/// let sum = source.open().unwrap().reduce(0, |a, n| a + n).unwrap();
/// let max = source.open().unwrap().reduce(0, |a, n| a.max(n)).unwrap();
/// assert_eq!((sum, max), (6, 3));
/// ```
pub trait StreamSource<T> {
    /// Open a fresh stream from the underlying origin.
    fn open(&self) -> StreamResult<Stream<T>>;
}

impl<T, F> StreamSource<T> for F
where
    F: Fn() -> StreamResult<Stream<T>>,
{
    fn open(&self) -> StreamResult<Stream<T>> {
        self()
    }
}
