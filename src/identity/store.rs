//! Durable key-value storage behind voter identities.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::AppError;

/// A small key-value store holding one voter token per link context.
///
/// The backing medium is swappable: the member CLI uses a JSON file, tests
/// use an in-memory map, and an embedded database would slot in the same
/// way. Operations are synchronous; this is local storage, never the
/// network.
pub trait TokenStore: Send + Sync {
    /// Looks up the token persisted for a context key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store is unreadable.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Persists a token for a context key, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store is unwritable.
    fn put(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// In-memory token store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().expect("token store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().expect("token store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();

        assert!(store.get("a|b|c").unwrap().is_none());

        store.put("a|b|c", "token-1").unwrap();
        assert_eq!(store.get("a|b|c").unwrap().as_deref(), Some("token-1"));

        store.put("a|b|c", "token-2").unwrap();
        assert_eq!(store.get("a|b|c").unwrap().as_deref(), Some("token-2"));
    }
}
