use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::key::CacheKey;
use super::store::{CacheError, CacheStore};

/// In-process cache store backed by a `HashMap`.
///
/// Used by tests and as the degraded runtime mode when the persistent store
/// cannot be opened: the dashboard still coalesces and falls back within the
/// process, it just forgets snapshots on exit.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Read(e.to_string()))?;
        Ok(entries.get(key.as_str()).cloned())
    }

    async fn set(&self, key: &CacheKey, value: String) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Write(e.to_string()))?;
        entries.insert(key.as_str().to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryCacheStore::new();
        let key = CacheKey::global("USD");

        assert!(store.get(&key).unwrap().is_none());

        store.set(&key, "{\"at\":1,\"data\":{}}".to_string()).await.unwrap();
        assert_eq!(store.get(&key).unwrap().as_deref(), Some("{\"at\":1,\"data\":{}}"));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = MemoryCacheStore::new();
        let key = CacheKey::quote("BTC", "USD");

        store.set(&key, "first".to_string()).await.unwrap();
        store.set(&key, "second".to_string()).await.unwrap();
        assert_eq!(store.get(&key).unwrap().as_deref(), Some("second"));
    }
}
