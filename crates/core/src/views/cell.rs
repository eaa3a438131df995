use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::fetch::FetchOutcome;
use crypto_monitor_market_data::MarketDataError;

/// Display-ready state of one view.
#[derive(Clone, Debug)]
pub struct ViewState<T> {
    /// The payload to render, live or cached
    pub data: Option<T>,

    /// True when `data` is a cached snapshot standing in for a failed fetch
    pub stale: bool,

    /// The most recent fetch failure, kept alongside stale data
    pub error: Option<MarketDataError>,

    /// True between the start of a refresh and its commit
    pub loading: bool,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            stale: false,
            error: None,
            loading: false,
        }
    }
}

/// State holder with a late-write guard.
///
/// Every refresh takes a generation token from [`begin`](Self::begin); a
/// [`commit`](Self::commit) applies its outcome only while its token is
/// still the newest one. A slow fetch that resolves after a newer refresh
/// has started is discarded instead of clobbering the newer result.
pub(crate) struct ViewCell<T> {
    state: RwLock<ViewState<T>>,
    generation: AtomicU64,
}

impl<T: Clone> ViewCell<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(ViewState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Mark the start of a refresh and return its token.
    pub(crate) async fn begin(&self) -> u64 {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.loading = true;
        token
    }

    /// Apply `outcome` if `token` is still current. Returns whether the
    /// outcome was applied.
    pub(crate) async fn commit(&self, token: u64, outcome: FetchOutcome<T>) -> bool {
        let mut state = self.state.write().await;

        // The token check has to hold the state lock: a newer begin can
        // land while a commit is parked waiting for the guard.
        if self.generation.load(Ordering::SeqCst) != token {
            return false;
        }

        state.data = outcome.data;
        state.stale = outcome.stale;
        state.error = outcome.error;
        state.loading = false;
        true
    }

    pub(crate) async fn snapshot(&self) -> ViewState<T> {
        self.state.read().await.clone()
    }
}
