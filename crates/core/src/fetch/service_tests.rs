//! Tests for the fallback fetch contract.
//!
//! # Critical Contract Points
//!
//! 1. Success persists the encoded entry and returns fresh data
//! 2. Failure with a prior snapshot returns that payload flagged stale
//! 3. Failure with no usable snapshot returns the error alone
//! 4. A corrupt snapshot behaves exactly like an absent one
//! 5. Cache backend failures never change the outcome shape
//! 6. Terminal errors must not consult the cache at all

#[cfg(test)]
mod tests {
    use crate::cache::{CacheEntry, CacheError, CacheKey, CacheStore};
    use crate::fetch::FetchService;
    use async_trait::async_trait;
    use crypto_monitor_market_data::MarketDataError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock CacheStore
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockCacheStore {
        entries: Arc<Mutex<HashMap<String, String>>>,
        fail_on_get: Arc<Mutex<bool>>,
        fail_on_set: Arc<Mutex<bool>>,
        get_count: Arc<Mutex<usize>>,
    }

    impl MockCacheStore {
        fn new() -> Self {
            Self::default()
        }

        fn seed(&self, key: &CacheKey, raw: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.as_str().to_string(), raw.to_string());
        }

        fn raw(&self, key: &CacheKey) -> Option<String> {
            self.entries.lock().unwrap().get(key.as_str()).cloned()
        }

        fn set_fail_on_get(&self, fail: bool) {
            *self.fail_on_get.lock().unwrap() = fail;
        }

        fn set_fail_on_set(&self, fail: bool) {
            *self.fail_on_set.lock().unwrap() = fail;
        }

        fn get_count(&self) -> usize {
            *self.get_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl CacheStore for MockCacheStore {
        fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
            *self.get_count.lock().unwrap() += 1;
            if *self.fail_on_get.lock().unwrap() {
                return Err(CacheError::Read("intentional read failure".into()));
            }
            Ok(self.entries.lock().unwrap().get(key.as_str()).cloned())
        }

        async fn set(&self, key: &CacheKey, value: String) -> Result<(), CacheError> {
            if *self.fail_on_set.lock().unwrap() {
                return Err(CacheError::Write("intentional write failure".into()));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.as_str().to_string(), value);
            Ok(())
        }
    }

    fn service(store: &MockCacheStore) -> FetchService {
        FetchService::new(Arc::new(store.clone()))
    }

    // =========================================================================
    // Success path
    // =========================================================================

    #[tokio::test]
    async fn test_success_returns_fresh_data() {
        let store = MockCacheStore::new();
        let key = CacheKey::listings("USD", 200);

        let outcome = service(&store)
            .fetch_with_fallback(&key, || async { Ok(vec![1.5, 2.5]) })
            .await;

        assert_eq!(outcome.data, Some(vec![1.5, 2.5]));
        assert!(!outcome.stale);
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_success_persists_decodable_entry() {
        let store = MockCacheStore::new();
        let key = CacheKey::listings("USD", 200);

        service(&store)
            .fetch_with_fallback(&key, || async { Ok(vec![1.5, 2.5]) })
            .await;

        let raw = store.raw(&key).expect("entry should be persisted");
        let entry: CacheEntry<Vec<f64>> = CacheEntry::decode(&raw).unwrap();
        assert_eq!(entry.data, vec![1.5, 2.5]);
        assert!(entry.at > 0);
    }

    #[tokio::test]
    async fn test_success_overwrites_previous_entry() {
        let store = MockCacheStore::new();
        let key = CacheKey::global("USD");
        let fetcher = service(&store);

        fetcher
            .fetch_with_fallback(&key, || async { Ok(vec![1.0]) })
            .await;
        fetcher
            .fetch_with_fallback(&key, || async { Ok(vec![2.0]) })
            .await;

        let raw = store.raw(&key).unwrap();
        let entry: CacheEntry<Vec<f64>> = CacheEntry::decode(&raw).unwrap();
        assert_eq!(entry.data, vec![2.0]);
    }

    #[tokio::test]
    async fn test_write_failure_does_not_change_success_outcome() {
        let store = MockCacheStore::new();
        store.set_fail_on_set(true);
        let key = CacheKey::global("USD");

        let outcome = service(&store)
            .fetch_with_fallback(&key, || async { Ok(vec![3.0]) })
            .await;

        assert_eq!(outcome.data, Some(vec![3.0]));
        assert!(!outcome.stale);
        assert!(outcome.error.is_none());
        assert!(store.raw(&key).is_none());
    }

    // =========================================================================
    // Failure path
    // =========================================================================

    #[tokio::test]
    async fn test_failure_with_prior_snapshot_serves_it_stale() {
        let store = MockCacheStore::new();
        let key = CacheKey::listings("USD", 200);
        let fetcher = service(&store);

        fetcher
            .fetch_with_fallback(&key, || async { Ok(vec![42.0]) })
            .await;

        let outcome = fetcher
            .fetch_with_fallback::<Vec<f64>, _, _>(&key, || async {
                Err(MarketDataError::Status { status: 502 })
            })
            .await;

        assert_eq!(outcome.data, Some(vec![42.0]));
        assert!(outcome.stale);
        assert_eq!(outcome.error, Some(MarketDataError::Status { status: 502 }));
    }

    #[tokio::test]
    async fn test_failure_without_snapshot_returns_error_alone() {
        let store = MockCacheStore::new();
        let key = CacheKey::quote("BTC", "USD");

        let outcome = service(&store)
            .fetch_with_fallback::<Vec<f64>, _, _>(&key, || async {
                Err(MarketDataError::Transport("connection refused".into()))
            })
            .await;

        assert!(outcome.data.is_none());
        assert!(!outcome.stale);
        assert!(matches!(outcome.error, Some(MarketDataError::Transport(_))));
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_counts_as_miss() {
        let store = MockCacheStore::new();
        let key = CacheKey::listings("USD", 200);
        store.seed(&key, "{\"at\": 5, \"data\": \"wrong shape\"}");

        let outcome = service(&store)
            .fetch_with_fallback::<Vec<f64>, _, _>(&key, || async {
                Err(MarketDataError::Status { status: 500 })
            })
            .await;

        assert!(outcome.data.is_none());
        assert!(!outcome.stale);
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_read_failure_counts_as_miss() {
        let store = MockCacheStore::new();
        let key = CacheKey::global("USD");
        store.seed(&key, "{\"at\": 1, \"data\": []}");
        store.set_fail_on_get(true);

        let outcome = service(&store)
            .fetch_with_fallback::<Vec<f64>, _, _>(&key, || async {
                Err(MarketDataError::Status { status: 500 })
            })
            .await;

        assert!(outcome.data.is_none());
        assert!(!outcome.stale);
    }

    #[tokio::test]
    async fn test_terminal_error_skips_cache_read() {
        let store = MockCacheStore::new();
        let key = CacheKey::quote("WAT", "USD");
        store.seed(&key, "{\"at\": 1, \"data\": []}");

        let outcome = service(&store)
            .fetch_with_fallback::<Vec<f64>, _, _>(&key, || async {
                Err(MarketDataError::SymbolNotFound("WAT".into()))
            })
            .await;

        assert!(outcome.data.is_none());
        assert!(!outcome.stale);
        assert_eq!(
            outcome.error,
            Some(MarketDataError::SymbolNotFound("WAT".into()))
        );
        assert_eq!(store.get_count(), 0);
    }
}
