use std::collections::HashMap;

use serde::Deserialize;

use super::coin::Coin;

/// Status block the backend attaches to its envelope responses.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    /// Zero or absent on success
    pub error_code: Option<i64>,

    /// Human-readable failure description
    pub error_message: Option<String>,
}

/// Response envelope for the `/api/cmc/*` endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<ApiStatus>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The application-level error carried in the status block, if any.
    /// A zero or absent error code means the envelope is healthy.
    pub fn error_status(&self) -> Option<(i64, String)> {
        let status = self.status.as_ref()?;
        match status.error_code {
            Some(code) if code != 0 => {
                let message = status
                    .error_message
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string());
                Some((code, message))
            }
            _ => None,
        }
    }
}

/// One value of the quotes endpoint's `data` map: a single coin, or an
/// array of coins when several assets share the requested symbol.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CoinEntry {
    Many(Vec<Coin>),
    One(Box<Coin>),
}

impl CoinEntry {
    /// The coin the dashboard displays: the entry itself, or the first
    /// element of an array entry. `None` for an empty array.
    pub fn into_coin(self) -> Option<Coin> {
        match self {
            Self::One(coin) => Some(*coin),
            Self::Many(coins) => coins.into_iter().next(),
        }
    }
}

/// The quotes endpoint's `data` payload: requested symbol to entry.
pub type QuoteMap = HashMap<String, CoinEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_status() {
        let json = r#"{"data": [1, 2, 3]}"#;

        let envelope: Envelope<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert!(envelope.error_status().is_none());
        assert_eq!(envelope.data.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_with_zero_error_code() {
        let json = r#"{"status": {"error_code": 0, "error_message": null}, "data": 7}"#;

        let envelope: Envelope<i64> = serde_json::from_str(json).unwrap();
        assert!(envelope.error_status().is_none());
    }

    #[test]
    fn test_envelope_with_api_error() {
        let json = r#"{"status": {"error_code": 1008, "error_message": "Plan limit reached"}}"#;

        let envelope: Envelope<Vec<i64>> = serde_json::from_str(json).unwrap();
        let (code, message) = envelope.error_status().unwrap();
        assert_eq!(code, 1008);
        assert_eq!(message, "Plan limit reached");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_quote_map_accepts_single_coin() {
        let json = r#"{
            "BTC": {"id": 1, "name": "Bitcoin", "symbol": "BTC", "quote": {}}
        }"#;

        let map: QuoteMap = serde_json::from_str(json).unwrap();
        let coin = map.into_iter().next().unwrap().1.into_coin().unwrap();
        assert_eq!(coin.name, "Bitcoin");
    }

    #[test]
    fn test_quote_map_accepts_coin_array() {
        let json = r#"{
            "BTC": [
                {"id": 1, "name": "Bitcoin", "symbol": "BTC", "quote": {}},
                {"id": 31469, "name": "Wrapped BTC", "symbol": "BTC", "quote": {}}
            ]
        }"#;

        let map: QuoteMap = serde_json::from_str(json).unwrap();
        let coin = map.into_iter().next().unwrap().1.into_coin().unwrap();
        assert_eq!(coin.id, 1);
    }

    #[test]
    fn test_empty_array_entry_has_no_coin() {
        let json = r#"{"BTC": []}"#;

        let map: QuoteMap = serde_json::from_str(json).unwrap();
        assert!(map.into_iter().next().unwrap().1.into_coin().is_none());
    }
}
