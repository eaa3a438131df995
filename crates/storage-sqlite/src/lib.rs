//! SQLite cache storage for the crypto dashboard.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the [`CacheStore`](crypto_monitor_core::cache::CacheStore)
//! trait defined in `crypto-monitor-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The cache repository and its database model
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The other crates are storage-agnostic and work with traits.
//!
//! ```text
//!     core (fallback fetching)
//!              │
//!              ▼
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod cache;
pub mod db;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export the cache repository and storage errors
pub use cache::SqliteCacheStore;
pub use errors::StorageError;
