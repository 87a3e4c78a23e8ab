//! The mutable entry map handed to an override capability
//!
//! An override capability receives `&mut Entries` exactly once, during
//! store construction. After construction returns, the map is frozen and
//! only shared references to it escape.

use crate::store::value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key/value entries of a configuration store
///
/// Keys are unique; insertion order is not preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entries {
    values: HashMap<String, ConfigValue>,
}

impl Entries {
    /// Create an empty entry map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key, returning the previous value if any
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_get() {
        let mut entries = Entries::new();
        assert!(entries.is_empty());

        let previous = entries.insert("api.host", "localhost");
        assert_eq!(previous, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("api.host").and_then(|v| v.as_str()), Some("localhost"));
        assert!(entries.contains_key("api.host"));
        assert!(entries.get("api.port").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut entries = Entries::new();
        entries.insert("timeout", 30i64);

        let previous = entries.insert("timeout", 60i64);
        assert_eq!(previous, Some(ConfigValue::Integer(30)));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("timeout").and_then(|v| v.as_integer()), Some(60));
    }

    #[test]
    fn test_iteration() {
        let mut entries = Entries::new();
        entries.insert("a", 1i64);
        entries.insert("b", 2i64);

        let mut keys: Vec<&str> = entries.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(entries.iter().count(), 2);
    }
}
