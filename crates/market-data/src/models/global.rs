use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Market-wide aggregates in one quote currency.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GlobalQuote {
    /// Combined market cap of all tracked coins
    pub total_market_cap: Option<f64>,

    /// Combined 24h trading volume
    pub total_volume_24h: Option<f64>,
}

/// Market-wide statistics returned by the global endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Bitcoin's share of the total market cap, in percent
    pub btc_dominance: Option<f64>,

    /// Number of cryptocurrencies the backend tracks
    pub active_cryptocurrencies: Option<i64>,

    /// Quote currency code to aggregate snapshot
    #[serde(default)]
    pub quote: HashMap<String, GlobalQuote>,
}

impl GlobalStats {
    /// The aggregates for a given currency, if present.
    pub fn quote_in(&self, currency: &str) -> Option<&GlobalQuote> {
        self.quote.get(currency)
    }
}
