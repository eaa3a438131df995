//! Error types and fallback classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all backend API operations
//! - [`FallbackClass`]: Classification for determining cache-fallback behavior

mod fallback;

pub use fallback::FallbackClass;

use thiserror::Error;

/// Errors that can occur while talking to the backend market API.
///
/// Each variant is classified into a [`FallbackClass`] via the
/// [`fallback_class`](Self::fallback_class) method, which determines whether
/// the fetch layer may serve a cached snapshot in its place.
///
/// The enum is `Clone` so that coalesced requests can hand the same failure
/// to every subscriber; source errors are captured as strings rather than
/// held as non-cloneable causes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// The request never produced an HTTP response: DNS failure, refused
    /// connection, timeout, or an aborted body read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    /// The message shape matches what the dashboard surfaces verbatim.
    #[error("API {status}")]
    Status {
        /// The HTTP status code of the response
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The backend returned a well-formed envelope carrying an
    /// application-level error status.
    #[error("API error {code}: {message}")]
    Api {
        /// The upstream error code
        code: i64,
        /// The upstream error message
        message: String,
    },

    /// The quotes endpoint answered successfully but had no entry for the
    /// requested symbol. This is a terminal error - the symbol does not
    /// exist, and a stale snapshot must not be shown in its place.
    #[error("No data found for {0}")]
    SymbolNotFound(String),
}

impl MarketDataError {
    /// Returns the fallback classification for this error.
    ///
    /// - [`FallbackClass::UseCache`]: the fetch layer should look for a
    ///   previously cached snapshot and serve it flagged as stale
    /// - [`FallbackClass::Terminal`]: fail without consulting the cache
    ///
    /// # Examples
    ///
    /// ```
    /// use crypto_monitor_market_data::errors::{FallbackClass, MarketDataError};
    ///
    /// let error = MarketDataError::Status { status: 502 };
    /// assert_eq!(error.fallback_class(), FallbackClass::UseCache);
    ///
    /// let error = MarketDataError::SymbolNotFound("WAT".to_string());
    /// assert_eq!(error.fallback_class(), FallbackClass::Terminal);
    /// ```
    pub fn fallback_class(&self) -> FallbackClass {
        match self {
            // The live answer is missing, not negative - old data helps
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_) | Self::Api { .. } => {
                FallbackClass::UseCache
            }

            // The live answer is a definitive "does not exist"
            Self::SymbolNotFound(_) => FallbackClass::Terminal,
        }
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None => Self::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
