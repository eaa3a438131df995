use std::sync::Arc;

use crate::cache::CacheKey;
use crate::fetch::FetchService;
use crate::views::ViewState;
use crypto_monitor_market_data::{ApiClient, Coin};

use super::cell::ViewCell;

/// One card of the top movers grid.
#[derive(Clone, Debug)]
pub struct Mover {
    pub name: String,
    pub symbol: String,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    /// 24h percent change, zero when the backend had none
    pub change: f64,
}

/// Rank coins by the magnitude of their 24h move, in either direction.
///
/// A -9% fall outranks a +2% rise. The sort is stable, so coins with equal
/// magnitude keep their listing order.
pub fn top_movers(coins: &[Coin], currency: &str, count: usize) -> Vec<Mover> {
    let mut movers: Vec<Mover> = coins
        .iter()
        .map(|coin| {
            let quote = coin.quote_in(currency);
            Mover {
                name: coin.name.clone(),
                symbol: coin.symbol.clone(),
                price: quote.and_then(|q| q.price),
                market_cap: quote.and_then(|q| q.market_cap),
                change: coin.change_24h(currency),
            }
        })
        .collect();

    movers.sort_by(|a, b| b.change.abs().total_cmp(&a.change.abs()));
    movers.truncate(count);
    movers
}

/// The biggest 24h movers out of the full listings set.
pub struct TopMoversView {
    client: Arc<ApiClient>,
    fetcher: FetchService,
    currency: String,
    limit: u32,
    cell: ViewCell<Vec<Coin>>,
}

impl TopMoversView {
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

    /// The top `count` movers from the current state.
    pub async fn movers(&self, count: usize) -> Vec<Mover> {
        match self.cell.snapshot().await.data {
            Some(coins) => top_movers(&coins, &self.currency, count),
            None => Vec::new(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_monitor_market_data::Quote;

    fn coin(symbol: &str, change: Option<f64>) -> Coin {
        let mut coin = Coin {
            id: 0,
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            cmc_rank: None,
            circulating_supply: None,
            total_supply: None,
            quote: Default::default(),
        };
        coin.quote.insert(
            "USD".to_string(),
            Quote {
                price: Some(1.0),
                percent_change_24h: change,
                ..Default::default()
            },
        );
        coin
    }

    #[test]
    fn test_movers_rank_by_magnitude() {
        let coins = vec![
            coin("A", Some(0.5)),
            coin("B", Some(-9.0)),
            coin("C", Some(2.0)),
            coin("D", Some(-0.1)),
        ];

        let movers = top_movers(&coins, "USD", 2);
        let symbols: Vec<&str> = movers.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B", "C"]);
        assert_eq!(movers[0].change, -9.0);
    }

    #[test]
    fn test_movers_truncate_to_count() {
        let coins: Vec<Coin> = (0..20)
            .map(|i| coin(&format!("C{}", i), Some(i as f64)))
            .collect();

        assert_eq!(top_movers(&coins, "USD", 12).len(), 12);
    }

    #[test]
    fn test_missing_change_ranks_as_unmoved() {
        let coins = vec![coin("A", None), coin("B", Some(1.0))];

        let movers = top_movers(&coins, "USD", 2);
        assert_eq!(movers[0].symbol, "B");
        assert_eq!(movers[1].change, 0.0);
    }

    #[test]
    fn test_equal_magnitude_keeps_listing_order() {
        let coins = vec![
            coin("A", Some(3.0)),
            coin("B", Some(-3.0)),
            coin("C", Some(3.0)),
        ];

        let movers = top_movers(&coins, "USD", 3);
        let symbols: Vec<&str> = movers.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B", "C"]);
    }
}
