//! Shared credential handle
//!
//! The host owns provider credentials and may replace them at runtime;
//! clients only ever read. `None` (or an empty string) means the key is
//! not configured.

use std::sync::Arc;

use parking_lot::RwLock;

/// Shared API key that can be updated by the host at runtime.
pub type ApiKey = Arc<RwLock<Option<String>>>;

/// Handle holding the given key.
pub fn api_key(value: impl Into<String>) -> ApiKey {
    Arc::new(RwLock::new(Some(value.into())))
}

/// Handle with no key configured.
pub fn unset_api_key() -> ApiKey {
    Arc::new(RwLock::new(None))
}
