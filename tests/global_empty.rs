//! Process-wide store behavior when no override capability is registered
//!
//! Lives in its own test binary: each file under tests/ runs as a separate
//! process, which is what a per-process singleton scenario needs.

use confstore::global;

#[test]
fn test_unregistered_process_has_empty_store() {
    let config = global();

    assert!(config.is_empty());
    assert!(config.get("foo").is_none());
    assert!(config.get("api.key").is_none());
    assert!(config.get("").is_none());

    // Same instance on every access
    assert!(std::ptr::eq(config, global()));
}
