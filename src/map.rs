//! Ordered map type for JSON objects.
//!
//! This module provides [`JsonMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object members. Key order is significant
//! here: `beautify` and `minify` must emit keys in the order the source
//! document declared them, and only the key-sort transform may reorder.
//!
//! ## Why IndexMap?
//!
//! A `HashMap` would shuffle members on every run, breaking the engine's
//! order-preservation guarantee and making output nondeterministic. An
//! `IndexMap` keeps iteration in insertion order, and its `insert` gives
//! duplicate keys last-value-wins semantics at the first key's position,
//! which matches what `JSON.parse` does in JavaScript hosts.
//!
//! ## Examples
//!
//! ```rust
//! use json_tidy::{JsonMap, JsonValue};
//!
//! let mut map = JsonMap::new();
//! map.insert("b".to_string(), JsonValue::from(2));
//! map.insert("a".to_string(), JsonValue::from(1));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["b", "a"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to JSON values.
///
/// # Examples
///
/// ```rust
/// use json_tidy::{JsonMap, JsonValue};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), JsonValue::from(1));
/// map.insert("second".to_string(), JsonValue::from(2));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("first").and_then(|v| v.as_i64()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(IndexMap<String, crate::JsonValue>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present, its value is replaced and the old
    /// value returned; the key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::JsonValue) -> Option<crate::JsonValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::JsonValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::JsonValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::JsonValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in
    /// insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::JsonValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::JsonValue>> for JsonMap {
    fn from(map: HashMap<String, crate::JsonValue>) -> Self {
        JsonMap(map.into_iter().collect())
    }
}

impl From<JsonMap> for HashMap<String, crate::JsonValue> {
    fn from(map: JsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, crate::JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a crate::JsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::JsonValue)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::JsonValue)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}
