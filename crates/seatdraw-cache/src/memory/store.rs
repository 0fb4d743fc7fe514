//! Process-local snapshot cache backed by moka.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use seatdraw_core::config::MemoryCacheConfig;
use seatdraw_core::result::AppResult;
use seatdraw_core::traits::cache::CacheProvider;

/// Snapshot cache that lives and dies with the process.
///
/// Nothing touches the disk, so a restart always starts from the configured
/// defaults. Entries older than `time_to_live_seconds` are evicted and then
/// read as absent.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    entries: Cache<String, String>,
}

impl MemoryCacheProvider {
    /// Build the cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();

        Self { entries }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).await)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned()).await;
        debug!(key, bytes = value.len(), "Snapshot entry kept in memory");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.invalidate(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.entries.invalidate_all();
        Ok(())
    }
}
