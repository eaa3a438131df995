//! Cache storage trait.
//!
//! This trait abstracts the persistence layer for cached API snapshots,
//! allowing different backends (SQLite, in-memory) to be used
//! interchangeably. Values are opaque JSON strings; the
//! [`CacheEntry`](super::CacheEntry) envelope is the caller's concern.

use async_trait::async_trait;
use thiserror::Error;

use super::key::CacheKey;

/// Failures of the cache backend itself.
///
/// These never abort a fetch: the fetch layer logs them and carries on as if
/// the slot were empty (reads) or the write had not been requested (writes).
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backend could not be opened or initialized.
    #[error("Failed to open cache store: {0}")]
    Open(String),

    /// A read from the backend failed.
    #[error("Cache read failed: {0}")]
    Read(String),

    /// A write to the backend failed.
    #[error("Cache write failed: {0}")]
    Write(String),
}

/// Storage interface for cached API snapshots.
///
/// # Design Notes
///
/// - Reads are sync: they are point lookups on a local store and callers
///   want them on the failure path without extra machinery
/// - Writes are async: implementations may serialize them through a writer
///   task, and callers treat them as best-effort
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// The raw value stored under `key`, if any.
    fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &CacheKey, value: String) -> Result<(), CacheError>;
}
