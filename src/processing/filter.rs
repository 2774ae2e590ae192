//! Element filtering and de-duplication for [`Stream`].

use std::collections::HashSet;
use std::error::Error as StdError;
use std::hash::Hash;

use crate::error::StreamError;

use super::Stream;

impl<T: 'static> Stream<T> {
    /// Returns a stream yielding only the elements for which `predicate` returns `true`.
    ///
    /// Relative order is preserved and `predicate` is evaluated once per element.
    pub fn filter<F>(&mut self, mut predicate: F) -> Stream<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.chain(move |source| {
            Box::new(source.filter(move |item| match item {
                Ok(value) => predicate(value),
                Err(_) => true,
            }))
        })
    }

    /// Like [`Stream::filter`], with a fallible `predicate`.
    pub fn try_filter<E, F>(&mut self, mut predicate: F) -> Stream<T>
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>> + 'static,
        F: FnMut(&T) -> Result<bool, E> + 'static,
    {
        self.chain(move |source| {
            Box::new(source.enumerate().filter_map(move |(index, item)| match item {
                Ok(value) => match predicate(&value) {
                    Ok(true) => Some(Ok(value)),
                    Ok(false) => None,
                    Err(e) => Some(Err(StreamError::transform(index, e))),
                },
                Err(e) => Some(Err(e)),
            }))
        })
    }

    /// Returns a stream yielding the first element seen for each distinct `key`.
    ///
    /// Later elements whose key was already seen are dropped. The stream stays lazy; only the
    /// set of seen keys is kept in memory.
    pub fn distinct<K, F>(&mut self, mut key: F) -> Stream<T>
    where
        K: Eq + Hash + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        let mut seen = HashSet::new();
        self.chain(move |source| {
            Box::new(source.filter(move |item| match item {
                // `insert` is true on first occurrence.
                Ok(value) => seen.insert(key(value)),
                Err(_) => true,
            }))
        })
    }
}
