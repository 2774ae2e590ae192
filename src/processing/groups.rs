//! Insertion-ordered grouping result returned by [`super::Stream::group_by`].

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A mapping from key to the elements that produced it.
///
/// Groups iterate in the order their key was first seen; elements inside a group keep their
/// source order.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    index: HashMap<K, usize>,
    entries: Vec<(K, Vec<T>)>,
}

impl<K, T> Default for Groups<K, T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, T> Groups<K, T> {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the group for `key`, creating the group on first occurrence.
    pub fn push(&mut self, key: K, value: T) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    /// Elements of the group for `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Returns `true` if a group exists for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K, T> Groups<K, T> {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// `(key, elements)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Consume the grouping into ordered `(key, elements)` pairs.
    pub fn into_vec(self) -> Vec<(K, Vec<T>)> {
        self.entries
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Groups;

    #[test]
    fn push_creates_groups_in_first_occurrence_order() {
        let mut g = Groups::new();
        g.push("b".to_string(), 1);
        g.push("a".to_string(), 2);
        g.push("b".to_string(), 3);

        assert_eq!(g.len(), 2);
        assert_eq!(g.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(g.get("b"), Some(&[1, 3][..]));
        assert_eq!(g.get("a"), Some(&[2][..]));
        assert_eq!(g.get("c"), None);
        assert!(g.contains_key("a"));
    }

    #[test]
    fn into_vec_keeps_order() {
        let mut g = Groups::new();
        for (k, v) in [(1, 'x'), (2, 'y'), (1, 'z')] {
            g.push(k, v);
        }
        assert_eq!(g.into_vec(), vec![(1, vec!['x', 'z']), (2, vec!['y'])]);
    }

    #[test]
    fn default_is_empty() {
        let g: Groups<u8, u8> = Groups::default();
        assert!(g.is_empty());
        assert_eq!(g.iter().count(), 0);
    }
}
