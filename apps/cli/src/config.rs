//! Environment-driven configuration.

use crypto_monitor_core::constants::{DEFAULT_CURRENCY, DEFAULT_LISTING_LIMIT};
use crypto_monitor_core::{errors::Error, Result};

/// Backend proxy consulted when `CRYPTO_MONITOR_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend API
    pub base_url: String,

    /// Quote currency for every view
    pub currency: String,

    /// Number of coins requested from the listings endpoint
    pub limit: u32,

    /// Directory holding the cache database
    pub cache_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CRYPTO_MONITOR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let currency = std::env::var("CRYPTO_MONITOR_CURRENCY")
            .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());
        let limit = match std::env::var("CRYPTO_MONITOR_LIMIT") {
            Ok(raw) => parse_limit(&raw)?,
            Err(_) => DEFAULT_LISTING_LIMIT,
        };

        Ok(Config {
            base_url,
            currency,
            limit,
            cache_dir: default_cache_dir()?,
        })
    }
}

fn parse_limit(raw: &str) -> Result<u32> {
    raw.parse().map_err(|_| {
        Error::InvalidConfigValue(format!("CRYPTO_MONITOR_LIMIT is not a count: {:?}", raw))
    })
}

fn default_cache_dir() -> Result<String> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| Error::Unexpected("No user cache directory on this platform".to_string()))?;
    Ok(dir.join("crypto-monitor").to_string_lossy().to_string())
}
