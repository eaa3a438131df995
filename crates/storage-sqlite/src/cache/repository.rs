use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::CacheEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::cache_entries::dsl::*;
use crypto_monitor_core::cache::{CacheError, CacheKey, CacheStore};

/// [`CacheStore`] backed by the `cache_entries` table.
///
/// Reads run on pooled connections; writes are serialized through the
/// writer actor.
pub struct SqliteCacheStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteCacheStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteCacheStore { pool, writer }
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let mut conn = get_connection(&self.pool).map_err(|e| CacheError::Open(e.to_string()))?;

        cache_entries
            .filter(cache_key.eq(key.as_str()))
            .select(cache_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(|e| CacheError::Read(e.to_string()))
    }

    async fn set(&self, key: &CacheKey, value: String) -> Result<(), CacheError> {
        let entry = CacheEntryDB {
            cache_key: key.as_str().to_string(),
            cache_value: value,
        };

        self.writer
            .exec(move |conn| {
                diesel::replace_into(cache_entries)
                    .values(&entry)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
            .map_err(|e| CacheError::Write(e.to_string()))
    }
}
