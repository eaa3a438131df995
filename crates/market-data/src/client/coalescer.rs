//! Single-flight de-duplication of identical in-flight requests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use tokio::sync::Mutex;

use crate::errors::MarketDataError;

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<str>, MarketDataError>>>;

/// De-duplicates concurrent fetches of the same resource.
///
/// The first caller for a key installs a shared future; callers arriving
/// while it is in flight subscribe to the same future instead of issuing a
/// second request. Whichever subscriber finishes the await removes the map
/// entry (if it is still the one it awaited), so the next refresh of the
/// key starts a fresh request.
pub(crate) struct RequestCoalescer {
    in_flight: Mutex<HashMap<String, SharedFetch>>,
}

impl RequestCoalescer {
    pub(crate) fn new() -> Self {
        Self {
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `fetch` for `key`, sharing one underlying request among all
    /// callers that overlap in time. The lock guards only map access and is
    /// never held across the await of the shared future.
    pub(crate) async fn fetch<F>(&self, key: &str, fetch: F) -> Result<Arc<str>, MarketDataError>
    where
        F: Future<Output = Result<Arc<str>, MarketDataError>> + Send + 'static,
    {
        let shared = {
            let mut in_flight = self.in_flight.lock().await;
            match in_flight.get(key) {
                Some(existing) => existing.clone(),
                None => {
                    let shared = fetch.boxed().shared();
                    in_flight.insert(key.to_string(), shared.clone());
                    shared
                }
            }
        };

        let result = shared.await;

        let mut in_flight = self.in_flight.lock().await;
        if let Some(current) = in_flight.get(key) {
            if current.ptr_eq(&shared) {
                in_flight.remove(key);
            }
        }

        result
    }
}
