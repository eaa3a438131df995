use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Currency-denominated market snapshot for one coin.
///
/// Every field is optional: the backend omits metrics it has no data for,
/// and display code substitutes a placeholder at render time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Latest price in the quote currency
    pub price: Option<f64>,

    /// Percent change over the last hour
    pub percent_change_1h: Option<f64>,

    /// Percent change over the last 24 hours
    pub percent_change_24h: Option<f64>,

    /// Percent change over the last 7 days
    pub percent_change_7d: Option<f64>,

    /// Percent change over the last 30 days
    pub percent_change_30d: Option<f64>,

    /// Percent change over the last 60 days
    pub percent_change_60d: Option<f64>,

    /// Percent change over the last 90 days
    pub percent_change_90d: Option<f64>,

    /// Market capitalization in the quote currency
    pub market_cap: Option<f64>,

    /// Trading volume over the last 24 hours
    pub volume_24h: Option<f64>,

    /// Share of the total crypto market cap, in percent
    pub market_cap_dominance: Option<f64>,
}

/// One listed cryptocurrency with its per-currency quotes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coin {
    /// Backend-assigned numeric id
    pub id: i64,

    /// Display name, e.g. "Bitcoin"
    pub name: String,

    /// Ticker symbol, e.g. "BTC"
    pub symbol: String,

    /// Rank by market cap (1 = largest)
    pub cmc_rank: Option<i64>,

    /// Coins currently in circulation
    pub circulating_supply: Option<f64>,

    /// Total coins issued
    pub total_supply: Option<f64>,

    /// Quote currency code (e.g. "USD") to market snapshot
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

impl Coin {
    /// The quote for a given currency, if the backend returned one.
    pub fn quote_in(&self, currency: &str) -> Option<&Quote> {
        self.quote.get(currency)
    }

    /// 24h percent change in a given currency, zero when absent.
    ///
    /// Missing quotes rank as unmoved rather than being dropped, so a coin
    /// with patchy data still appears in listings.
    pub fn change_24h(&self, currency: &str) -> f64 {
        self.quote_in(currency)
            .and_then(|q| q.percent_change_24h)
            .unwrap_or(0.0)
    }
}
