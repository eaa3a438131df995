//! Database model for cached API snapshots.

use diesel::prelude::*;

/// Database model for cache key-value pairs
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::cache_entries)]
pub struct CacheEntryDB {
    pub cache_key: String,
    pub cache_value: String,
}
