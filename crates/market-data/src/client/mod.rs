//! HTTP client for the backend market API.
//!
//! # Endpoints
//!
//! - Global aggregates: `/api/cmc/global?convert={currency}`
//! - Listings: `/api/cmc/listings?limit={n}&convert={currency}`
//! - Per-symbol quotes: `/api/cmc/quotes?symbols={symbol}&convert={currency}`
//! - Price history: `/api/history?symbol={symbol}&convert={currency}&days={n}`
//!
//! The `/api/cmc/*` endpoints wrap their payload in a
//! [`Envelope`](crate::models::Envelope) with an optional error status; the
//! history endpoint returns its payload bare.

mod coalescer;

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::MarketDataError;
use crate::models::{Coin, CoinEntry, Envelope, GlobalStats, PriceHistory, QuoteMap};

use coalescer::RequestCoalescer;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the backend market API.
///
/// Concurrent calls that hit the same endpoint with the same parameters are
/// coalesced into a single underlying request; every caller decodes the one
/// shared body. Meant to be shared behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::new("http://localhost:8000");
/// let stats = client.global_stats("USD").await?;
/// ```
pub struct ApiClient {
    client: Client,
    base_url: String,
    coalescer: RequestCoalescer,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (scheme + authority,
    /// trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            coalescer: RequestCoalescer::new(),
        }
    }

    /// Market-wide aggregates in the given quote currency.
    pub async fn global_stats(&self, convert: &str) -> Result<GlobalStats, MarketDataError> {
        let body = self.get_body(global_path(convert)).await?;
        decode_envelope(&body)
    }

    /// The top `limit` coins by market cap, with quotes in `convert`.
    pub async fn listings(&self, limit: u32, convert: &str) -> Result<Vec<Coin>, MarketDataError> {
        let body = self.get_body(listings_path(limit, convert)).await?;
        decode_envelope(&body)
    }

    /// The quote for one symbol. The symbol is normalized to uppercase
    /// before the request; a successful response without an entry for it is
    /// [`MarketDataError::SymbolNotFound`].
    pub async fn quote(&self, symbol: &str, convert: &str) -> Result<Coin, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        let body = self.get_body(quotes_path(&symbol, convert)).await?;
        let map: QuoteMap = decode_envelope(&body)?;
        coin_for_symbol(map, &symbol)
    }

    /// Price history for one symbol over the trailing `days` days.
    pub async fn history(
        &self,
        symbol: &str,
        convert: &str,
        days: u32,
    ) -> Result<PriceHistory, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        let body = self.get_body(history_path(&symbol, convert, days)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Issue a coalesced GET for `path_and_query` and return the body of a
    /// 2xx response.
    async fn get_body(&self, path_and_query: String) -> Result<Arc<str>, MarketDataError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let client = self.client.clone();

        self.coalescer
            .fetch(&path_and_query, async move {
                debug!("GET {}", url);
                let response = client.get(&url).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(MarketDataError::Status {
                        status: status.as_u16(),
                    });
                }

                let body = response.text().await?;
                Ok(Arc::from(body.as_str()))
            })
            .await
    }
}

/// Decode an envelope body, surfacing an application-level error status.
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, MarketDataError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;

    if let Some((code, message)) = envelope.error_status() {
        return Err(MarketDataError::Api { code, message });
    }

    envelope
        .data
        .ok_or_else(|| MarketDataError::Decode("response envelope has no data".to_string()))
}

/// Pull the displayed coin for `symbol` out of a quotes payload.
fn coin_for_symbol(mut map: QuoteMap, symbol: &str) -> Result<Coin, MarketDataError> {
    map.remove(symbol)
        .and_then(CoinEntry::into_coin)
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
}

fn global_path(convert: &str) -> String {
    format!("/api/cmc/global?convert={}", convert)
}

fn listings_path(limit: u32, convert: &str) -> String {
    format!("/api/cmc/listings?limit={}&convert={}", limit, convert)
}

fn quotes_path(symbol: &str, convert: &str) -> String {
    format!(
        "/api/cmc/quotes?symbols={}&convert={}",
        urlencoding::encode(symbol),
        convert
    )
}

fn history_path(symbol: &str, convert: &str, days: u32) -> String {
    format!(
        "/api/history?symbol={}&convert={}&days={}",
        urlencoding::encode(symbol),
        convert,
        days
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_path() {
        assert_eq!(
            listings_path(200, "USD"),
            "/api/cmc/listings?limit=200&convert=USD"
        );
    }

    #[test]
    fn test_global_path() {
        assert_eq!(global_path("EUR"), "/api/cmc/global?convert=EUR");
    }

    #[test]
    fn test_quotes_path_encodes_symbol() {
        assert_eq!(
            quotes_path("BTC", "USD"),
            "/api/cmc/quotes?symbols=BTC&convert=USD"
        );
        assert_eq!(
            quotes_path("A&B", "USD"),
            "/api/cmc/quotes?symbols=A%26B&convert=USD"
        );
    }

    #[test]
    fn test_history_path() {
        assert_eq!(
            history_path("BTC", "USD", 7),
            "/api/history?symbol=BTC&convert=USD&days=7"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_decode_envelope_success() {
        let body = r#"{"data": [1, 2, 3]}"#;
        let data: Vec<i64> = decode_envelope(body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_envelope_api_error() {
        let body = r#"{"status": {"error_code": 1010, "error_message": "Invalid convert"}}"#;
        let result: Result<Vec<i64>, _> = decode_envelope(body);
        assert_eq!(
            result.unwrap_err(),
            MarketDataError::Api {
                code: 1010,
                message: "Invalid convert".to_string()
            }
        );
    }

    #[test]
    fn test_decode_envelope_missing_data() {
        let body = r#"{"status": {"error_code": 0}}"#;
        let result: Result<Vec<i64>, _> = decode_envelope(body);
        assert!(matches!(result, Err(MarketDataError::Decode(_))));
    }

    #[test]
    fn test_coin_for_symbol_prefers_first_of_array() {
        let json = r#"{
            "BTC": [
                {"id": 1, "name": "Bitcoin", "symbol": "BTC", "quote": {}},
                {"id": 31469, "name": "Wrapped BTC", "symbol": "BTC", "quote": {}}
            ]
        }"#;
        let map: QuoteMap = serde_json::from_str(json).unwrap();

        let coin = coin_for_symbol(map, "BTC").unwrap();
        assert_eq!(coin.id, 1);
    }

    #[test]
    fn test_coin_for_symbol_missing_is_not_found() {
        let map: QuoteMap = serde_json::from_str("{}").unwrap();

        let error = coin_for_symbol(map, "WAT").unwrap_err();
        assert_eq!(error, MarketDataError::SymbolNotFound("WAT".to_string()));
    }
}
