//! Core types for iptf-core.
//!
//! This module defines the per-line [`FieldMap`] shared by the extractor,
//! the rule matcher and the output formatter, together with the names of the
//! synthetic keys the extractor injects.

use std::collections::HashMap;

/// Key holding the first 15 characters of the raw line.
pub const TIMESTAMP_KEY: &str = "_timestamp_";
/// Key holding the composed `src:spt` endpoint.
pub const SOURCE_KEY: &str = "_src_";
/// Key holding the composed `dst:dpt` endpoint.
pub const DESTINATION_KEY: &str = "_dest_";

/// Fields extracted from a single log line.
///
/// Keys are lower-cased field names (`proto`, `in`, `src`, …) plus the three
/// synthetic keys above. Values are always the raw token text; nothing is
/// parsed into numbers. A missing key and an empty value are distinct:
/// `OUT=` yields `Some("")`, no `OUT` token at all yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

// Extracted maps always hold the synthetic keys, so they are never empty.
#[allow(clippy::len_without_is_empty)]
impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Value of `key`, or `""` when the field is absent. Used for display only.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The display timestamp prefix. Empty only for an empty line.
    pub fn timestamp(&self) -> &str {
        self.get_or_empty(TIMESTAMP_KEY)
    }

    pub fn source(&self) -> &str {
        self.get_or_empty(SOURCE_KEY)
    }

    pub fn destination(&self) -> &str {
        self.get_or_empty(DESTINATION_KEY)
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
