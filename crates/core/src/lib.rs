//! Crypto Monitor Core - Caching, view state, and display derivations.
//!
//! This crate contains the dashboard's business logic. It is
//! storage-agnostic and defines the cache trait that is implemented
//! by the `storage-sqlite` crate.

pub mod cache;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod format;
pub mod sparkline;
pub mod views;

// Re-export the fallback primitive and view types
pub use cache::{CacheEntry, CacheError, CacheKey, CacheStore, MemoryCacheStore};
pub use fetch::{FetchOutcome, FetchService};
pub use views::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
