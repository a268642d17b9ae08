//! Ordered document model shared by both codecs.
//!
//! A [`Document`] is a map from string keys to values, where each value
//! is a leaf or a nested document. Iteration is always in ascending key
//! order; both codecs rely on this as their canonical output order.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// The kind of a value, used for dispatch and in accessor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Set,
    Str,
    Int,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Set => f.write_str("set"),
            Kind::Str => f.write_str("string"),
            Kind::Int => f.write_str("integer"),
        }
    }
}

/// Errors produced by typed document accessors.
///
/// These are local to the failed call; the document itself stays valid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },
    #[error("missing key: {0:?}")]
    Missing(String),
}

/// An ordered mapping from string keys to values.
///
/// Keys are unique; inserting an existing key overwrites the previous
/// value. Iteration yields entries in ascending lexicographic key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for Document<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Document<V> {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a value by exact key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Looks up a value by exact key, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Looks up a value, failing with [`AccessError::Missing`] when the
    /// key is absent.
    pub fn require(&self, key: &str) -> Result<&V, AccessError> {
        self.entries
            .get(key)
            .ok_or_else(|| AccessError::Missing(key.to_owned()))
    }

    /// Returns `true` when the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts an entry, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Removes an entry, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    /// Iterates over entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, V> {
        self.entries.iter()
    }
}

impl<'a, V> IntoIterator for &'a Document<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = btree_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V> IntoIterator for Document<V> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> FromIterator<(String, V)> for Document<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V> Extend<(String, V)> for Document<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_insertion_overwrites() {
        let mut doc = Document::new();
        doc.insert("k", 1u32);
        assert_eq!(doc.insert("k", 2u32), Some(1));
        assert_eq!(doc.get("k"), Some(&2));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn iteration_is_key_sorted() {
        let mut doc = Document::new();
        doc.insert("b", 2u32);
        doc.insert("a", 1u32);
        doc.insert("c", 3u32);
        let keys: Vec<&str> = doc.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn require_reports_the_missing_key() {
        let doc: Document<u32> = Document::new();
        assert_eq!(
            doc.require("gone"),
            Err(AccessError::Missing("gone".to_owned()))
        );
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forward: Document<u32> =
            [("a".to_owned(), 1), ("b".to_owned(), 2)].into_iter().collect();
        let mut backward = Document::new();
        backward.insert("b", 2u32);
        backward.insert("a", 1u32);
        assert_eq!(forward, backward);
    }
}
