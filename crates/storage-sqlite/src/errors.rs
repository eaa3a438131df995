//! Storage-specific error types for SQLite operations.
//!
//! These wrap Diesel and r2d2 errors inside the storage layer. At the
//! [`CacheStore`](crypto_monitor_core::cache::CacheStore) boundary they are
//! flattened into [`CacheError`](crypto_monitor_core::cache::CacheError)
//! variants by the repository, which knows whether it was reading or
//! writing.

use diesel::result::Error as DieselError;
use thiserror::Error;

/// Errors internal to the SQLite storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
