//! Terminal operations for [`Stream`]: fold, group and materialize.

use std::hash::Hash;

use crate::error::StreamResult;

use super::{Groups, Stream};

impl<T: 'static> Stream<T> {
    /// Fold every element into an accumulator, left to right in source order.
    ///
    /// Returns `initial` for an empty stream.
    pub fn reduce<A, F>(&mut self, initial: A, mut combine: F) -> StreamResult<A>
    where
        F: FnMut(A, T) -> A,
    {
        self.take_source()?
            .try_fold(initial, |acc, item| item.map(|value| combine(acc, value)))
    }

    /// Drain the stream into groups keyed by `key`.
    ///
    /// See [`Groups`] for ordering guarantees.
    pub fn group_by<K, F>(&mut self, mut key: F) -> StreamResult<Groups<K, T>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut groups = Groups::new();
        for item in self.take_source()? {
            let value = item?;
            groups.push(key(&value), value);
        }
        Ok(groups)
    }

    /// Drain the stream into a `Vec`, preserving order.
    pub fn collect(&mut self) -> StreamResult<Vec<T>> {
        self.take_source()?.collect()
    }
}
