//! Process-wide configuration store
//!
//! One `ConfigStore` per process, constructed lazily on first access. The
//! embedding application may register an override capability beforehand,
//! typically from a source file excluded from version control; if none is
//! registered the store is empty. Construction happens exactly once even
//! under concurrent first access, after which the entries are read-only
//! and may be read from any thread without further synchronization.

use crate::error::{ConfigError, Result};
use crate::store::{ConfigOverride, ConfigStore};
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

static OVERRIDE: OnceCell<Box<dyn ConfigOverride + Send + Sync>> = OnceCell::new();
static STORE: OnceCell<ConfigStore> = OnceCell::new();

/// Register the override capability for this process
///
/// Must be called before the first [`global`] access, during
/// single-threaded startup. At most one capability can be registered per
/// process; a second registration, or one arriving after the store has
/// already been built, is rejected rather than silently ignored.
pub fn register_override(capability: Box<dyn ConfigOverride + Send + Sync>) -> Result<()> {
    if STORE.get().is_some() {
        warn!("override capability registered after first configuration access, ignoring");
        return Err(ConfigError::store_already_initialized(
            "override capability registered after first access",
        ));
    }

    OVERRIDE
        .set(capability)
        .map_err(|_| ConfigError::OverrideAlreadyRegistered)
}

/// Access the process-wide configuration store
///
/// The first call constructs the store: if an override capability was
/// registered it runs exactly once, with write access to the entries;
/// otherwise the store is empty. Subsequent calls return the same instance
/// and never re-run the capability.
pub fn global() -> &'static ConfigStore {
    STORE.get_or_init(|| match OVERRIDE.get() {
        Some(capability) => ConfigStore::with_override(capability.as_ref()),
        None => {
            debug!("no override capability registered, configuration store is empty");
            ConfigStore::empty()
        },
    })
}
