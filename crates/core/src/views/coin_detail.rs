use std::sync::Arc;

use crate::cache::CacheKey;
use crate::fetch::FetchService;
use crate::format::{format_grouped, format_percent2};
use crate::views::{StatItem, ViewState};
use crypto_monitor_market_data::{ApiClient, Coin, Quote};

use super::cell::ViewCell;

/// One row of the price performance grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfItem {
    pub label: &'static str,
    /// Percent change over the window, absent when the backend had none
    pub change: Option<f64>,
}

impl PerfItem {
    /// Direction used for styling. A missing change counts as up.
    pub fn is_up(&self) -> bool {
        self.change.unwrap_or(0.0) >= 0.0
    }
}

/// The six summary cards of the detail header.
///
/// Absent metrics render as zero rather than a placeholder, matching the
/// dashboard's treatment of partially populated quotes.
pub fn detail_stats(coin: &Coin, currency: &str) -> Vec<StatItem> {
    let quote = coin.quote_in(currency).cloned().unwrap_or_default();
    let rank = match coin.cmc_rank {
        Some(rank) => format!("#{}", rank),
        None => "#-".to_string(),
    };

    vec![
        StatItem {
            label: "Market Cap",
            value: format!("${}", format_grouped(quote.market_cap.unwrap_or(0.0), 3)),
        },
        StatItem {
            label: "24h Volume",
            value: format!("${}", format_grouped(quote.volume_24h.unwrap_or(0.0), 3)),
        },
        StatItem {
            label: "Dominance",
            value: format_percent2(Some(quote.market_cap_dominance.unwrap_or(0.0))),
        },
        StatItem {
            label: "Rank",
            value: rank,
        },
        StatItem {
            label: "Circulating",
            value: format!(
                "{} {}",
                format_grouped(coin.circulating_supply.unwrap_or(0.0), 3),
                coin.symbol
            ),
        },
        StatItem {
            label: "Total Supply",
            value: format!(
                "{} {}",
                format_grouped(coin.total_supply.unwrap_or(0.0), 3),
                coin.symbol
            ),
        },
    ]
}

/// Percent changes across the six standard windows, in display order.
pub fn performance_rows(coin: &Coin, currency: &str) -> Vec<PerfItem> {
    let quote = coin.quote_in(currency).cloned().unwrap_or_default();
    let Quote {
        percent_change_1h,
        percent_change_24h,
        percent_change_7d,
        percent_change_30d,
        percent_change_60d,
        percent_change_90d,
        ..
    } = quote;

    vec![
        PerfItem { label: "1h", change: percent_change_1h },
        PerfItem { label: "24h", change: percent_change_24h },
        PerfItem { label: "7d", change: percent_change_7d },
        PerfItem { label: "30d", change: percent_change_30d },
        PerfItem { label: "60d", change: percent_change_60d },
        PerfItem { label: "90d", change: percent_change_90d },
    ]
}

/// The quote half of the coin detail page.
///
/// An unknown symbol is terminal: the backend answered, there is just no
/// such coin, so no cached snapshot is consulted.
pub struct CoinQuoteView {
    client: Arc<ApiClient>,
    fetcher: FetchService,
    symbol: String,
    currency: String,
    cell: ViewCell<Coin>,
}

impl CoinQuoteView {
    pub fn new(
        client: Arc<ApiClient>,
        fetcher: FetchService,
        symbol: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            client,
            fetcher,
            symbol: symbol.into().to_uppercase(),
            currency: currency.into().to_uppercase(),
            cell: ViewCell::new(),
        }
    }

    /// Fetch the live quote, falling back to the cached snapshot.
    pub async fn refresh(&self) -> ViewState<Coin> {
        let token = self.cell.begin().await;
        let key = CacheKey::quote(&self.symbol, &self.currency);

        let client = self.client.clone();
        let symbol = self.symbol.clone();
        let currency = self.currency.clone();
        let outcome = self
            .fetcher
            .fetch_with_fallback(&key, || async move { client.quote(&symbol, &currency).await })
            .await;

        self.cell.commit(token, outcome).await;
        self.cell.snapshot().await
    }

    pub async fn state(&self) -> ViewState<Coin> {
        self.cell.snapshot().await
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
