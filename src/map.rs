//! Ordered map view over info strings.
//!
//! This module provides [`InfoMap`], a wrapper around [`IndexMap`] that
//! holds the key/value pairs of an info string in their original order.
//! It bridges the wire format to structured access: parse a buffer into a
//! map, edit it, and encode it back under a size tier.
//!
//! ## Why IndexMap?
//!
//! Info strings are ordered on the wire, and re-encoding should not
//! shuffle pairs. `IndexMap` keeps insertion order, so a parse/encode
//! round trip preserves the original layout.
//!
//! ## Examples
//!
//! ```rust
//! use infolex::{InfoMap, InfoLimit};
//!
//! let map = InfoMap::parse("\\name\\Dave\\score\\10");
//! assert_eq!(map.get("NAME"), Some("Dave"));
//!
//! let encoded = map.encode(InfoLimit::Standard).unwrap();
//! assert_eq!(encoded, "\\name\\Dave\\score\\10");
//! ```

use crate::error::Result;
use crate::info::{self, InfoLimit};
use crate::tables::eq_fold;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map of info-string pairs.
///
/// Lookups fold case the same way the codec does, so `get("Name")` and
/// `get("name")` hit the same entry, and inserting under a differently
/// cased key updates the existing entry in place.
///
/// # Examples
///
/// ```rust
/// use infolex::InfoMap;
///
/// let mut map = InfoMap::new();
/// map.insert("model".to_string(), "ranger".to_string());
/// map.insert("MODEL".to_string(), "grunt".to_string());
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("model"), Some("grunt"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoMap(IndexMap<String, String>);

impl InfoMap {
    /// Creates an empty `InfoMap`.
    #[must_use]
    pub fn new() -> Self {
        InfoMap(IndexMap::new())
    }

    /// Creates an empty `InfoMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        InfoMap(IndexMap::with_capacity(capacity))
    }

    /// Parses the pairs of an info string into a map.
    ///
    /// Later duplicates overwrite earlier ones; the wire position of the
    /// first occurrence is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infolex::InfoMap;
    ///
    /// let map = InfoMap::parse("\\a\\1\\b\\2");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(info: &str) -> Self {
        let mut map = InfoMap::new();
        for (key, value) in info::pairs(info) {
            map.insert(key.to_string(), value.to_string());
        }
        map
    }

    /// Encodes the map as a canonical info string under `limit`.
    ///
    /// Every pair is validated and the ceiling enforced, exactly as if the
    /// pairs were set one at a time.
    ///
    /// # Errors
    ///
    /// Returns the first validation or overflow error hit; see
    /// [`info::set_value_for_key`].
    pub fn encode(&self, limit: InfoLimit) -> Result<String> {
        let mut out = String::new();
        for (key, value) in &self.0 {
            info::set_value_for_key(&mut out, key, value, limit)?;
        }
        Ok(out)
    }

    /// Inserts a pair, replacing any case-insensitive match for the key.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        let existing = self.0.keys().find(|k| eq_fold(k, &key)).cloned();
        match existing {
            Some(k) => self.0.insert(k, value),
            None => self.0.insert(key, value),
        }
    }

    /// Looks up a value, folding case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| eq_fold(k, key))
            .map(|(_, v)| v.as_str())
    }

    /// Removes a pair by key, folding case. Returns the removed value.
    ///
    /// Remaining pairs keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let existing = self.0.keys().find(|k| eq_fold(k, key)).cloned()?;
        self.0.shift_remove(&existing)
    }

    /// Returns the number of pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<IndexMap<String, String>> for InfoMap {
    fn from(map: IndexMap<String, String>) -> Self {
        InfoMap(map)
    }
}

impl From<InfoMap> for IndexMap<String, String> {
    fn from(map: InfoMap) -> Self {
        map.0
    }
}

impl IntoIterator for InfoMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a InfoMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for InfoMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut map = InfoMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
