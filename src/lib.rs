//! Confstore - an overridable process-wide configuration store
//!
//! Confstore provides a single, lazily-constructed key/value mapping whose
//! entries can be supplied by an optional override capability at startup.
//! The capability is the stand-in for an environment-specific secrets file
//! excluded from version control: the base code stays generic, and a
//! non-tracked source file registers the deployment's values. Absence of
//! an override is valid and yields an empty store.
//!
//! # Core Properties
//!
//! - **One-time initialization**: the store is built exactly once per
//!   process, even under concurrent first access
//! - **Write-once entries**: the override capability runs once, during
//!   construction, before any reader can observe the entries
//! - **Absent is not an error**: lookups return `Option`; required-key
//!   handling belongs to the call site
//! - **Injectable**: consumers can take a `ConfigStore` reference instead
//!   of the process-wide instance, so tests use isolated stores
//!
//! # Example Usage
//!
//! ```rust
//! use confstore::{register_override, Entries};
//!
//! // Typically done from a non-tracked source file, early in startup
//! register_override(Box::new(|entries: &mut Entries| {
//!     entries.insert("api.host", "localhost");
//!     entries.insert("retries", 3i64);
//! }))?;
//!
//! let config = confstore::global();
//! assert_eq!(config.get_str("api.host"), Some("localhost"));
//! assert_eq!(config.get_integer("retries"), Some(3));
//! assert!(config.get("api.token").is_none());
//! # Ok::<(), confstore::ConfigError>(())
//! ```

pub mod error;
pub mod global;
pub mod store;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use global::{global, register_override};
pub use store::{ConfigOverride, ConfigStore, ConfigValue, Entries};

/// Current version of confstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
