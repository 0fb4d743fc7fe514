//! Cache provider trait for pluggable snapshot backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for key/value cache backends (JSON file or in-memory).
///
/// All values are stored as strings (JSON). Entries carry no per-key TTL;
/// a backend may still evict entries on its own schedule, which callers
/// treat the same as an absent key.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a key from the cache.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists in the cache.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Get a typed value by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value by serializing to JSON.
    async fn set_json<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json).await
    }

    /// Check that the cache backend is usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Remove every entry from the cache.
    async fn flush_all(&self) -> AppResult<()>;
}
