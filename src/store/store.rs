//! The frozen configuration store
//!
//! A `ConfigStore` is written exactly once, during construction, by an
//! optional override capability. Everything after that is read-only, so a
//! constructed store can be shared freely across threads.

use crate::error::{ConfigError, Result};
use crate::store::entries::Entries;
use crate::store::overrides::ConfigOverride;
use crate::store::value::ConfigValue;
use tracing::debug;

/// Process-wide key/value configuration, frozen after construction
///
/// Prefer passing a `ConfigStore` reference to consumers over reaching for
/// the process-wide instance in [`crate::global`]; tests can then construct
/// isolated stores with a fake override capability.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: Entries,
}

impl ConfigStore {
    /// Create a store with no entries
    ///
    /// This is the result of constructing without an override capability;
    /// every lookup on it is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct a store populated by the given override capability
    ///
    /// The capability runs exactly once, here, with write access to the
    /// entries. After this returns the entries are frozen.
    pub fn with_override(capability: &dyn ConfigOverride) -> Self {
        let mut entries = Entries::new();
        capability.populate(&mut entries);
        debug!(entry_count = entries.len(), "configuration store populated by override");
        Self { entries }
    }

    /// Look up a key
    ///
    /// Absence is not an error; callers handle `None` at the call site,
    /// either by substituting a default or by treating the key as required
    /// via [`ConfigStore::get_required`].
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Look up a key the caller considers mandatory
    pub fn get_required(&self, key: &str) -> Result<&ConfigValue> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::missing_key(key))
    }

    /// Look up a string value; absent or differently typed keys yield `None`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_checked(key, ConfigValue::as_str, "string")
    }

    /// Look up an integer value; absent or differently typed keys yield `None`
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get_checked(key, ConfigValue::as_integer, "integer")
    }

    /// Look up a float value; absent or differently typed keys yield `None`
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get_checked(key, ConfigValue::as_float, "float")
    }

    /// Look up a boolean value; absent or differently typed keys yield `None`
    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get_checked(key, ConfigValue::as_boolean, "boolean")
    }

    fn get_checked<'a, T>(
        &'a self,
        key: &str,
        accessor: impl Fn(&'a ConfigValue) -> Option<T>,
        expected: &'static str,
    ) -> Option<T> {
        let value = self.entries.get(key)?;
        let typed = accessor(value);
        if typed.is_none() {
            debug!(
                key,
                expected,
                actual = value.type_name(),
                "configuration key has unexpected type"
            );
        }
        typed
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    /// Iterate over entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter()
    }

    /// Shared view of the underlying entries
    pub fn entries(&self) -> &Entries {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_store_is_absent() {
        let store = ConfigStore::empty();
        assert!(store.get("foo").is_none());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_override_values_visible_with_types_preserved() {
        let store = ConfigStore::with_override(&|entries: &mut Entries| {
            entries.insert("foo", "bar");
            entries.insert("count", 42i64);
            entries.insert("verbose", true);
        });

        assert_eq!(store.get("foo").and_then(|v| v.as_str()), Some("bar"));
        assert_eq!(store.get("count"), Some(&ConfigValue::Integer(42)));
        assert_eq!(store.get("verbose").and_then(|v| v.as_boolean()), Some(true));
        assert!(store.get("baz").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_required() {
        let store = ConfigStore::with_override(&|entries: &mut Entries| {
            entries.insert("api.key", "sekrit");
        });

        assert!(store.get_required("api.key").is_ok());

        let err = store.get_required("api.host").unwrap_err();
        match err {
            ConfigError::MissingKey { key } => assert_eq!(key, "api.host"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_typed_accessors() {
        let store = ConfigStore::with_override(&|entries: &mut Entries| {
            entries.insert("host", "localhost");
            entries.insert("port", 8080i64);
            entries.insert("ratio", 0.5);
            entries.insert("debug", false);
        });

        assert_eq!(store.get_str("host"), Some("localhost"));
        assert_eq!(store.get_integer("port"), Some(8080));
        assert_eq!(store.get_float("ratio"), Some(0.5));
        assert_eq!(store.get_boolean("debug"), Some(false));
    }

    #[test]
    fn test_typed_accessor_mismatch_is_none() {
        let store = ConfigStore::with_override(&|entries: &mut Entries| {
            entries.insert("port", "8080");
        });

        // Present but a string, so the integer view is absent
        assert_eq!(store.get_integer("port"), None);
        assert_eq!(store.get_str("port"), Some("8080"));
        // Genuinely absent keys look the same to the typed accessor
        assert_eq!(store.get_integer("missing"), None);
    }

    #[test]
    fn test_last_insert_wins() {
        let store = ConfigStore::with_override(&|entries: &mut Entries| {
            entries.insert("env", "staging");
            entries.insert("env", "production");
        });

        assert_eq!(store.get_str("env"), Some("production"));
        assert_eq!(store.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_empty_store_absent_for_every_key(key in ".*") {
            let store = ConfigStore::empty();
            prop_assert!(store.get(&key).is_none());
        }
    }
}
