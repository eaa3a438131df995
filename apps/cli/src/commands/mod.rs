//! Command implementations and the shared service wiring behind them.

pub mod coin;
pub mod dashboard;

use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use crypto_monitor_core::{CacheStore, FetchService, MemoryCacheStore};
use crypto_monitor_market_data::ApiClient;
use crypto_monitor_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, SqliteCacheStore, StorageError,
};

use crate::config::Config;

/// Client and cache plumbing shared by every command.
pub struct AppState {
    pub client: Arc<ApiClient>,
    pub fetcher: FetchService,
}

/// Builds the API client and the fetch service over the snapshot cache.
///
/// When the SQLite cache cannot be opened the process keeps running with an
/// in-memory store; snapshots then only survive for the lifetime of the
/// command.
pub fn build_state(config: &Config) -> Result<AppState> {
    let store: Arc<dyn CacheStore> = match open_sqlite_store(config) {
        Ok(store) => store,
        Err(e) => {
            warn!("Cache database unavailable ({}), using in-memory cache", e);
            Arc::new(MemoryCacheStore::new())
        }
    };

    Ok(AppState {
        client: Arc::new(ApiClient::new(&config.base_url)),
        fetcher: FetchService::new(store),
    })
}

fn open_sqlite_store(config: &Config) -> Result<Arc<SqliteCacheStore>, StorageError> {
    let db_path = init(&config.cache_dir)?;
    info!("Cache database: {}", db_path);

    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    Ok(Arc::new(SqliteCacheStore::new(pool, writer)))
}
