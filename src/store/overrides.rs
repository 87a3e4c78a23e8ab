//! The override capability supplied by the embedding application
//!
//! This is the seam that lets deployment-specific or secret values be
//! injected without modifying the base crate: the application (typically
//! from a source file excluded from version control) supplies an
//! implementation and registers it before first access. Absence of an
//! override is a valid, supported configuration and yields an empty store.

use crate::store::entries::Entries;

/// An externally supplied capability that populates configuration entries
/// during store construction
///
/// `populate` is invoked exactly once per store, with write access to the
/// entries, before any reader can observe them. It has no failure channel;
/// its only job is to insert some number of key/value pairs.
pub trait ConfigOverride {
    /// Insert or overwrite entries in the store under construction
    fn populate(&self, entries: &mut Entries);
}

// Closures double as override capabilities, which keeps tests and simple
// embeddings free of named adapter types.
impl<F> ConfigOverride for F
where
    F: Fn(&mut Entries),
{
    fn populate(&self, entries: &mut Entries) {
        self(entries)
    }
}
