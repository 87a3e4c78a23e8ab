//! Error types for confstore

use thiserror::Error;

/// Main error type for configuration operations
///
/// Absence of a key is not an error in this crate; `ConfigStore::get`
/// returns `Option`. These variants cover the few places where a caller
/// explicitly asks for a failure channel (`get_required`) or violates the
/// registration contract.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A key required by the caller was not present in the store
    #[error("Missing configuration key: {key}")]
    MissingKey { key: String },

    /// An override capability was registered twice in the same process
    #[error("An override capability is already registered for this process")]
    OverrideAlreadyRegistered,

    /// Registration attempted after the process-wide store was built
    #[error("Configuration store already initialized: {reason}")]
    StoreAlreadyInitialized { reason: String },

    /// A value could not be converted between representations
    #[error("Value conversion failed: {reason}")]
    ValueConversion { reason: String },
}

impl ConfigError {
    /// Create a new missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Create a new store already initialized error
    pub fn store_already_initialized(reason: impl Into<String>) -> Self {
        Self::StoreAlreadyInitialized {
            reason: reason.into(),
        }
    }

    /// Create a new value conversion error
    pub fn value_conversion(reason: impl Into<String>) -> Self {
        Self::ValueConversion {
            reason: reason.into(),
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
