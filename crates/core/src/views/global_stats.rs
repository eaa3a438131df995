use std::sync::Arc;

use crate::cache::CacheKey;
use crate::fetch::FetchService;
use crate::format::format_magnitude;
use crate::views::{StatItem, ViewState};
use crypto_monitor_market_data::{ApiClient, GlobalStats};

use super::cell::ViewCell;

/// Market-wide statistics strip.
pub struct GlobalStatsView {
    client: Arc<ApiClient>,
    fetcher: FetchService,
    currency: String,
    cell: ViewCell<GlobalStats>,
}

impl GlobalStatsView {
    pub fn new(client: Arc<ApiClient>, fetcher: FetchService, currency: impl Into<String>) -> Self {
        Self {
            client,
            fetcher,
            currency: currency.into().to_uppercase(),
            cell: ViewCell::new(),
        }
    }

    /// Fetch fresh aggregates, falling back to the cached snapshot.
    pub async fn refresh(&self) -> ViewState<GlobalStats> {
        let token = self.cell.begin().await;
        let key = CacheKey::global(&self.currency);

        let client = self.client.clone();
        let currency = self.currency.clone();
        let outcome = self
            .fetcher
            .fetch_with_fallback(&key, || async move { client.global_stats(&currency).await })
            .await;

        self.cell.commit(token, outcome).await;
        self.cell.snapshot().await
    }

    pub async fn state(&self) -> ViewState<GlobalStats> {
        self.cell.snapshot().await
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// The four stat cards, in display order.
pub fn stat_items(stats: &GlobalStats, currency: &str) -> Vec<StatItem> {
    let quote = stats.quote_in(currency);

    vec![
        StatItem {
            label: "Total Market Cap",
            value: format!(
                "${}",
                format_magnitude(quote.and_then(|q| q.total_market_cap))
            ),
        },
        StatItem {
            label: "24h Volume",
            value: format!(
                "${}",
                format_magnitude(quote.and_then(|q| q.total_volume_24h))
            ),
        },
        StatItem {
            label: "BTC Dominance",
            value: format!("{}%", format_magnitude(stats.btc_dominance)),
        },
        StatItem {
            label: "Active Cryptos",
            value: format_magnitude(stats.active_cryptocurrencies.map(|n| n as f64)),
        },
    ]
}
