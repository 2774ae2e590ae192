//! Element mapping for [`Stream`].

use std::error::Error as StdError;

use crate::error::StreamError;

use super::Stream;

impl<T: 'static> Stream<T> {
    /// Returns a stream yielding `transform(item)` for every element, in source order.
    ///
    /// `transform` runs once per element, only when a downstream consumer pulls it.
    pub fn map<U, F>(&mut self, mut transform: F) -> Stream<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.chain(move |source| Box::new(source.map(move |item| item.map(&mut transform))))
    }

    /// Like [`Stream::map`], with a fallible `transform`.
    ///
    /// An `Err` becomes [`StreamError::Transform`] carrying the element's position in this stage,
    /// and aborts the terminal operation that pulled it.
    pub fn try_map<U, E, F>(&mut self, mut transform: F) -> Stream<U>
    where
        U: 'static,
        E: Into<Box<dyn StdError + Send + Sync + 'static>> + 'static,
        F: FnMut(T) -> Result<U, E> + 'static,
    {
        self.chain(move |source| {
            Box::new(source.enumerate().map(move |(index, item)| {
                item.and_then(|value| transform(value).map_err(|e| StreamError::transform(index, e)))
            }))
        })
    }
}
