//! SQLite storage implementation for cached API snapshots.

mod model;
mod repository;

pub use model::CacheEntryDB;
pub use repository::SqliteCacheStore;

// Re-export trait from core for convenience
pub use crypto_monitor_core::cache::CacheStore;
