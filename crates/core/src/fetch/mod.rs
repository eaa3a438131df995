//! Stale-cache-fallback fetching.
//!
//! Every view acquires its data through [`FetchService::fetch_with_fallback`]:
//! a live call that persists its result on success and falls back to the
//! last persisted snapshot on failure.
//!
//! ```text
//! fetch() ── Ok ──> persist CacheEntry (best effort) ──> fresh data
//!    │
//!    └─ Err ─┬─ UseCache ──> read slot ─┬─ decodable ──> stale data + error
//!            │                          └─ missing/corrupt ──> error only
//!            └─ Terminal ──────────────────────────────────> error only
//! ```
//!
//! Cache backend failures never abort the flow: a failed write leaves the
//! success outcome untouched, a failed read counts as a miss. Both are
//! logged.

use std::future::Future;
use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{CacheEntry, CacheKey, CacheStore};
use crypto_monitor_market_data::{FallbackClass, MarketDataError};

#[cfg(test)]
mod service_tests;

/// What a fallback fetch produced.
///
/// The three shapes a view can receive:
/// - fresh: `data` present, `stale == false`, no error
/// - stale: `data` present, `stale == true`, error carried alongside
/// - failed: no data, `stale == false`, error carried
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// The payload, live or cached
    pub data: Option<T>,

    /// True when `data` came from the cache instead of the live call
    pub stale: bool,

    /// The live failure, kept even when a cached snapshot papers over it
    pub error: Option<MarketDataError>,
}

impl<T> FetchOutcome<T> {
    fn fresh(data: T) -> Self {
        Self {
            data: Some(data),
            stale: false,
            error: None,
        }
    }

    fn stale(data: T, error: MarketDataError) -> Self {
        Self {
            data: Some(data),
            stale: true,
            error: Some(error),
        }
    }

    fn failed(error: MarketDataError) -> Self {
        Self {
            data: None,
            stale: false,
            error: Some(error),
        }
    }
}

/// Runs live fetches against an injected [`CacheStore`], persisting
/// successes and serving cached snapshots when the live call fails.
#[derive(Clone)]
pub struct FetchService {
    cache: Arc<dyn CacheStore>,
}

impl FetchService {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    /// Run `fetch` and reconcile its result with the cache slot at `key`.
    ///
    /// On success the payload is persisted under `key` before being
    /// returned; persistence problems are logged and swallowed. On failure
    /// the error's [`FallbackClass`] decides whether the slot is read at
    /// all: a terminal error (the API said the data does not exist) must
    /// not be papered over with an old snapshot.
    pub async fn fetch_with_fallback<T, F, Fut>(&self, key: &CacheKey, fetch: F) -> FetchOutcome<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, MarketDataError>>,
    {
        match fetch().await {
            Ok(data) => {
                let entry = CacheEntry::capture(data);
                self.persist(key, &entry).await;
                FetchOutcome::fresh(entry.data)
            }
            Err(error) => {
                if error.fallback_class() == FallbackClass::Terminal {
                    return FetchOutcome::failed(error);
                }
                match self.read_entry::<T>(key) {
                    Some(entry) => FetchOutcome::stale(entry.data, error),
                    None => FetchOutcome::failed(error),
                }
            }
        }
    }

    /// Best-effort write of a fresh entry.
    async fn persist<T: Serialize>(&self, key: &CacheKey, entry: &CacheEntry<T>) {
        let encoded = match entry.encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode cache entry for {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, encoded).await {
            warn!("Failed to persist cache entry for {}: {}", key, e);
        }
    }

    /// The decodable entry under `key`, if any. Read errors and corrupt
    /// entries both come back as `None`.
    fn read_entry<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<CacheEntry<T>> {
        let raw = match self.cache.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
        };

        match CacheEntry::decode(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Discarding undecodable cache entry for {}: {}", key, e);
                None
            }
        }
    }
}
