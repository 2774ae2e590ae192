//! Sorting for [`Stream`].
//!
//! Sorting is the one intermediate operation that cannot stay lazy: the whole upstream has to
//! be drained into memory before the first element can be emitted.

use std::cmp::Ordering;

use super::Stream;

/// Sort direction for [`Stream::sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Drain the stream, stable-sort it by `key`, and return the result as a new stream.
    ///
    /// Elements with equal keys keep their input order in both directions. Floating point keys
    /// can be wrapped in [`ordered_float::OrderedFloat`].
    ///
    /// If an upstream element fails while draining, the returned stream yields that error as its
    /// only element.
    pub fn sorted<K, F>(&mut self, mut key: F, order: SortOrder) -> Stream<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let source = match self.take_source() {
            Ok(source) => source,
            Err(_) => return Stream::consumed(),
        };

        match source.collect::<Result<Vec<T>, _>>() {
            Ok(mut items) => {
                items.sort_by(|a, b| order.apply(key(a).cmp(&key(b))));
                Stream::new(items)
            }
            Err(e) => Stream::from_source(Box::new(std::iter::once(Err::<T, _>(e)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use ordered_float::OrderedFloat;

    use super::SortOrder;
    use crate::error::{IngestionError, StreamError};
    use crate::processing::Stream;

    #[test]
    fn sorted_ascending_is_non_decreasing() {
        let out = Stream::new(vec![5, 3, 9, 1, 3])
            .sorted(|n| *n, SortOrder::Ascending)
            .collect()
            .unwrap();
        assert_eq!(out, vec![1, 3, 3, 5, 9]);
    }

    #[test]
    fn sorted_descending_is_non_increasing() {
        let out = Stream::new(vec![2.5_f64, 10.0, 0.5])
            .sorted(|x| OrderedFloat(*x), SortOrder::Descending)
            .collect()
            .unwrap();
        assert_eq!(out, vec![10.0, 2.5, 0.5]);
    }

    #[test]
    fn sorted_is_stable_in_both_directions() {
        let input = vec![("a", 2), ("b", 1), ("c", 2), ("d", 1), ("e", 3)];

        let asc = Stream::new(input.clone())
            .sorted(|(_, k)| *k, SortOrder::Ascending)
            .collect()
            .unwrap();
        assert_eq!(asc, vec![("b", 1), ("d", 1), ("a", 2), ("c", 2), ("e", 3)]);

        let desc = Stream::new(input)
            .sorted(|(_, k)| *k, SortOrder::Descending)
            .collect()
            .unwrap();
        assert_eq!(desc, vec![("e", 3), ("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn sorted_drains_upstream_immediately() {
        use std::cell::Cell;
        use std::rc::Rc;

        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let mut parent = Stream::new((0..4).inspect(move |_| counter.set(counter.get() + 1)));

        let mut child = parent.sorted(|n| *n, SortOrder::Descending);
        assert_eq!(pulled.get(), 4);
        assert!(parent.is_consumed());
        assert_eq!(child.collect().unwrap(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn sorted_result_keeps_chaining() {
        let out = Stream::new(vec![4, 4, 1, 3, 1])
            .sorted(|n| *n, SortOrder::Descending)
            .distinct(|n| *n)
            .map(|n| n * 10)
            .collect()
            .unwrap();
        assert_eq!(out, vec![40, 30, 10]);
    }

    #[test]
    fn sorted_carries_upstream_error_to_terminal() {
        let items: Vec<Result<i32, IngestionError>> = vec![
            Ok(2),
            Err(IngestionError::Io(std::io::Error::other("boom"))),
        ];
        let err = Stream::from_results(items)
            .sorted(|n| *n, SortOrder::Ascending)
            .collect()
            .unwrap_err();
        assert!(matches!(err, StreamError::Ingestion(_)));
    }
}
