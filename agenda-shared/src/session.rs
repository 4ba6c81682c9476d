//! Session storage abstraction.
//!
//! The dashboard keeps exactly one value in tab-scoped storage: the raw bearer
//! token under [`TOKEN_KEY`]. The browser adapter lives in the web crate;
//! [`MemorySessionStore`] backs tests and non-browser hosts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Value some clients wrote when serializing a missing token. Treated as
/// "no token" wherever it is read or written.
pub const TOKEN_SENTINEL: &str = "undefined";

/// Errors raised by a [`SessionStore`] write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No storage is reachable (no window, storage disabled, private mode).
    #[error("session storage is unavailable")]
    Unavailable,
    /// The storage refused the write (quota exceeded, security error).
    #[error("session storage rejected the write: {0}")]
    Rejected(String),
}

/// Tab-scoped string key-value storage.
pub trait SessionStore {
    /// Read the raw value stored under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the underlying storage is unavailable or
    /// refuses the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Returns `true` when `token` can be used as a bearer credential.
#[must_use]
pub fn is_usable_token(token: &str) -> bool {
    !token.is_empty() && token != TOKEN_SENTINEL
}

/// In-memory [`SessionStore`]. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_tokens() {
        assert!(is_usable_token("eyJhbGciOiJIUzI1NiJ9.e30.sig"));
        assert!(is_usable_token("x"));
        assert!(!is_usable_token(""));
        assert!(!is_usable_token("undefined"));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());
        store.write(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.read(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(store.len(), 1);
        store.remove(TOKEN_KEY);
        assert_eq!(store.read(TOKEN_KEY), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemorySessionStore::new();
        let view = store.clone();
        store.write(TOKEN_KEY, "shared").unwrap();
        assert_eq!(view.read(TOKEN_KEY).as_deref(), Some("shared"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemorySessionStore::with_entry("other", "1");
        store.remove(TOKEN_KEY);
        assert_eq!(store.read("other").as_deref(), Some("1"));
    }

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "session storage is unavailable"
        );
        assert_eq!(
            StoreError::Rejected("QuotaExceededError".to_string()).to_string(),
            "session storage rejected the write: QuotaExceededError"
        );
    }
}
