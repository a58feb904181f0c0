//! Insertion-ordered map with unique keys.
//!
//! Members and parameters must keep declaration order for regeneration and
//! must be unique by name. `OrderedMap` stores entries in a `Vec` and keeps an
//! `FxHashMap` from key to slot for O(1) lookup. Insertion never overwrites:
//! a repeated key is reported as [`DuplicateKey`].

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// A key was inserted twice.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("duplicate key `{0}`")]
pub struct DuplicateKey(pub String);

/// Insertion-ordered map keyed by `String`.
#[derive(Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Append `value` under `key`. Fails if `key` is already present, leaving
    /// the map unchanged.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<(), DuplicateKey> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(DuplicateKey(key));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.entries.get(slot).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.entries.get_mut(slot).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove `key`, shifting later entries down to keep order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for (k, _) in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut(k.as_str()) {
                *i -= 1;
            }
        }
        Some(value)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

// The index is derived from `entries`, so equality only looks at entries.
impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for OrderedMap<V> {}

impl<V: fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = &'a V;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (String, V)>, fn(&'a (String, V)) -> &'a V>;

    fn into_iter(self) -> Self::IntoIter {
        fn value<K, V>(entry: &(K, V)) -> &V {
            &entry.1
        }
        self.entries
            .iter()
            .map(value as fn(&'a (String, V)) -> &'a V)
    }
}
