//! Crypto Monitor Market Data Crate
//!
//! This crate provides the typed HTTP client for the crypto market backend
//! API consumed by the dashboard.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Market-wide aggregates, listings, per-symbol quotes, price history
//! - Single-flight coalescing of identical concurrent requests
//! - Fallback classification of failures for the caching layer
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   View Layer     | --> |    ApiClient     |  (typed endpoint methods)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | RequestCoalescer |  (single-flight per path+query)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   Backend API    |  (/api/cmc/*, /api/history)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   Wire Models    |  (Coin, GlobalStats, ...)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ApiClient`] - Typed client for the backend endpoints
//! - [`Coin`] / [`Quote`] - Per-coin market data
//! - [`GlobalStats`] - Market-wide aggregates
//! - [`PriceHistory`] - Time-ordered price series
//! - [`MarketDataError`] / [`FallbackClass`] - Failure taxonomy and its
//!   cache-fallback classification

pub mod client;
pub mod errors;
pub mod models;

pub use client::ApiClient;
pub use errors::{FallbackClass, MarketDataError};
pub use models::{Coin, GlobalQuote, GlobalStats, HistoryPoint, PriceHistory, Quote};
