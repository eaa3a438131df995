//! Wire models for the backend market API.
//!
//! This module contains the data types the client decodes responses into:
//! - `coin` - Per-coin market data (Coin, Quote)
//! - `global` - Market-wide aggregates (GlobalStats, GlobalQuote)
//! - `history` - Price series (PriceHistory, HistoryPoint)
//! - `envelope` - Response envelope and quotes-map shapes (Envelope, CoinEntry)
//!
//! All numeric market data is `f64` and optional: the backend omits fields
//! it has no value for, and rendering substitutes placeholders. Field names
//! mirror the upstream JSON, so no rename attributes are needed.

mod coin;
mod envelope;
mod global;
mod history;

pub use coin::{Coin, Quote};
pub use envelope::{ApiStatus, CoinEntry, Envelope, QuoteMap};
pub use global::{GlobalQuote, GlobalStats};
pub use history::{HistoryPoint, PriceHistory};
