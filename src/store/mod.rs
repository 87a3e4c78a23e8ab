//! Configuration store, values, and the override capability seam
//!
//! This module contains the dependency-injection surface: stores built
//! here are plain values that can be passed to consumers or used in tests.
//! The process-wide singleton lives in [`crate::global`].

pub mod entries;
pub mod overrides;
pub mod store;
pub mod value;

// Re-export commonly used items
pub use entries::Entries;
pub use overrides::ConfigOverride;
pub use store::ConfigStore;
pub use value::ConfigValue;
