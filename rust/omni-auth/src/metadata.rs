//! Mutable call-metadata container.
//!
//! Stands in for the transport's header list. The request signer mutates
//! only its own three keys; every other entry is read-only input to
//! canonicalization. Keys are normalized to lowercase ASCII, matching gRPC
//! metadata conventions, and both key and per-key value order are
//! preserved.

use indexmap::IndexMap;

/// An ordered, case-insensitive multimap of metadata entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataMap {
    entries: IndexMap<String, Vec<String>>,
}

impl MetadataMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `key`.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .entry(normalize(key.as_ref()))
            .or_default()
            .push(value.into());
    }

    /// Replace all values for `key` with the single `value`.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(normalize(key.as_ref()), vec![value.into()]);
    }

    /// Remove `key` entirely, returning whether it was present.
    pub fn remove(&mut self, key: impl AsRef<str>) -> bool {
        self.entries.shift_remove(&normalize(key.as_ref())).is_some()
    }

    /// First value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries
            .get(&normalize(key.as_ref()))
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values for `key`, in insertion order. Empty if absent.
    #[must_use]
    pub fn get_all(&self, key: impl AsRef<str>) -> &[String] {
        self.entries
            .get(&normalize(key.as_ref()))
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate over `(key, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

fn normalize(key: &str) -> String {
    key.to_ascii_lowercase()
}
