use std::sync::Arc;

use crate::cache::CacheKey;
use crate::constants::{SPARKLINE_HEIGHT, SPARKLINE_PADDING, SPARKLINE_WIDTH};
use crate::fetch::FetchService;
use crate::sparkline::{sparkline_geometry, SparklineGeometry};
use crate::views::ViewState;
use crypto_monitor_market_data::ApiClient;

use super::cell::ViewCell;

/// The chart half of the coin detail page.
///
/// Caches the projected price series rather than the raw timestamped
/// points; the chart is the only consumer.
pub struct PriceHistoryView {
    client: Arc<ApiClient>,
    fetcher: FetchService,
    symbol: String,
    currency: String,
    days: u32,
    cell: ViewCell<Vec<f64>>,
}

impl PriceHistoryView {
    pub fn new(
        client: Arc<ApiClient>,
        fetcher: FetchService,
        symbol: impl Into<String>,
        currency: impl Into<String>,
        days: u32,
    ) -> Self {
        Self {
            client,
            fetcher,
            symbol: symbol.into().to_uppercase(),
            currency: currency.into().to_uppercase(),
            days,
            cell: ViewCell::new(),
        }
    }

    /// Fetch the price series, falling back to the cached snapshot.
    pub async fn refresh(&self) -> ViewState<Vec<f64>> {
        let token = self.cell.begin().await;
        let key = CacheKey::history(&self.symbol, &self.currency, self.days);

        let client = self.client.clone();
        let symbol = self.symbol.clone();
        let currency = self.currency.clone();
        let days = self.days;
        let outcome = self
            .fetcher
            .fetch_with_fallback(&key, || async move {
                client
                    .history(&symbol, &currency, days)
                    .await
                    .map(|history| history.prices())
            })
            .await;

        self.cell.commit(token, outcome).await;
        self.cell.snapshot().await
    }

    pub async fn state(&self) -> ViewState<Vec<f64>> {
        self.cell.snapshot().await
    }

    /// Sparkline geometry for the current series, at the standard viewport.
    ///
    /// `None` until a series of at least two points is loaded.
    pub async fn sparkline(&self) -> Option<SparklineGeometry> {
        let state = self.cell.snapshot().await;
        sparkline_geometry(
            state.data.as_deref()?,
            SPARKLINE_WIDTH,
            SPARKLINE_HEIGHT,
            SPARKLINE_PADDING,
        )
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}
