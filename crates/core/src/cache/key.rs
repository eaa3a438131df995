use std::fmt;

/// Deterministic identifier for one logical query's cached result slot.
///
/// Keys follow the shape `cache:<kind>:<scope>:<currency>[:<param>]`, built
/// only through the constructors here so two logically different queries can
/// never collide and the same query always lands on the same slot. Symbols
/// and currency codes are normalized to uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for the full listings set, e.g. `cache:listings:USD:200`.
    pub fn listings(currency: &str, limit: u32) -> Self {
        Self(format!(
            "cache:listings:{}:{}",
            currency.to_uppercase(),
            limit
        ))
    }

    /// Key for one coin's quote, e.g. `cache:quote:BTC:USD`.
    pub fn quote(symbol: &str, currency: &str) -> Self {
        Self(format!(
            "cache:quote:{}:{}",
            symbol.to_uppercase(),
            currency.to_uppercase()
        ))
    }

    /// Key for one coin's price history, e.g. `cache:history:BTC:USD:7`.
    pub fn history(symbol: &str, currency: &str, days: u32) -> Self {
        Self(format!(
            "cache:history:{}:{}:{}",
            symbol.to_uppercase(),
            currency.to_uppercase(),
            days
        ))
    }

    /// Key for the market-wide aggregates, e.g. `cache:global:USD`.
    pub fn global(currency: &str) -> Self {
        Self(format!("cache:global:{}", currency.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
