use std::sync::Arc;

use crate::cache::CacheKey;
use crate::fetch::FetchService;
use crate::views::ViewState;
use crypto_monitor_market_data::{ApiClient, Coin};

use super::cell::ViewCell;

/// Sortable column of the market table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Change24h,
    MarketCap,
    Volume24h,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Filter text and sort selection for the market table.
///
/// Selecting the current sort key again flips the direction; selecting a
/// different key sorts by it descending.
#[derive(Clone, Debug)]
pub struct TableControls {
    filter: String,
    sort_key: SortKey,
    sort_order: SortOrder,
}

impl Default for TableControls {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_key: SortKey::MarketCap,
            sort_order: SortOrder::Descending,
        }
    }
}

impl TableControls {
    pub fn new(filter: impl Into<String>, sort_key: SortKey, sort_order: SortOrder) -> Self {
        Self {
            filter: filter.into(),
            sort_key,
            sort_order,
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = match self.sort_order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Descending;
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

fn sort_value(coin: &Coin, currency: &str, key: SortKey) -> f64 {
    let quote = coin.quote_in(currency);
    let field = match key {
        SortKey::Price => quote.and_then(|q| q.price),
        SortKey::Change24h => quote.and_then(|q| q.percent_change_24h),
        SortKey::MarketCap => quote.and_then(|q| q.market_cap),
        SortKey::Volume24h => quote.and_then(|q| q.volume_24h),
    };
    field.unwrap_or(0.0)
}

/// Apply the free-text filter, then sort by the selected column.
///
/// The filter is a case-insensitive substring match against name or symbol.
/// Coins without a quote in `currency` sort as zero.
pub fn filter_and_sort<'a>(
    coins: &'a [Coin],
    currency: &str,
    controls: &TableControls,
) -> Vec<&'a Coin> {
    let query = controls.filter.trim().to_lowercase();
    let mut rows: Vec<&Coin> = coins
        .iter()
        .filter(|coin| {
            query.is_empty()
                || coin.name.to_lowercase().contains(&query)
                || coin.symbol.to_lowercase().contains(&query)
        })
        .collect();

    rows.sort_by(|a, b| {
        let ord = sort_value(a, currency, controls.sort_key)
            .total_cmp(&sort_value(b, currency, controls.sort_key));
        match controls.sort_order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    rows
}

/// The full market overview table.
///
/// Shares its cache key with [`super::TopMoversView`]; both write the same
/// listings payload, so concurrent refreshes are last-writer-wins.
pub struct MarketTableView {
    client: Arc<ApiClient>,
    fetcher: FetchService,
    currency: String,
    limit: u32,
    cell: ViewCell<Vec<Coin>>,
}

impl MarketTableView {
    pub fn new(
        client: Arc<ApiClient>,
        fetcher: FetchService,
        currency: impl Into<String>,
        limit: u32,
    ) -> Self {
        Self {
            client,
            fetcher,
            currency: currency.into().to_uppercase(),
            limit,
            cell: ViewCell::new(),
        }
    }

    /// Fetch fresh listings, falling back to the cached snapshot.
    pub async fn refresh(&self) -> ViewState<Vec<Coin>> {
        let token = self.cell.begin().await;
        let key = CacheKey::listings(&self.currency, self.limit);

        let client = self.client.clone();
        let currency = self.currency.clone();
        let limit = self.limit;
        let outcome = self
            .fetcher
            .fetch_with_fallback(&key, || async move { client.listings(limit, &currency).await })
            .await;

        self.cell.commit(token, outcome).await;
        self.cell.snapshot().await
    }

    pub async fn state(&self) -> ViewState<Vec<Coin>> {
        self.cell.snapshot().await
    }

    /// Filtered, sorted rows from the current state.
    pub async fn rows(&self, controls: &TableControls) -> Vec<Coin> {
        match self.cell.snapshot().await.data {
            Some(coins) => filter_and_sort(&coins, &self.currency, controls)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
