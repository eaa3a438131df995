//! Client-side cache of last-good API responses.
//!
//! This module provides the pieces the fallback fetch layer persists
//! through:
//!
//! - [`CacheKey`] - Deterministic per-query slot identifiers
//! - [`CacheEntry`] - The `{at, data}` JSON envelope around cached payloads
//! - [`CacheStore`] - Storage trait implemented by the SQLite backend
//! - [`MemoryCacheStore`] - In-process implementation for tests and
//!   degraded mode
//!
//! The cache holds at most one entry per key, overwritten on every
//! successful fetch and read only when a fetch fails. Nothing here expires
//! or evicts; retention is bounded by the key space, not by time.

mod entry;
mod key;
mod memory;
mod store;

pub use entry::CacheEntry;
pub use key::CacheKey;
pub use memory::MemoryCacheStore;
pub use store::{CacheError, CacheStore};
