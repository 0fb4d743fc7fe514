//! Snapshot cache configuration.

use serde::{Deserialize, Serialize};

/// Top-level cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache provider type: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// JSON file backend configuration.
    #[serde(default)]
    pub file: FileCacheConfig,
    /// In-memory backend configuration.
    #[serde(default)]
    pub memory: MemoryCacheConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            file: FileCacheConfig::default(),
            memory: MemoryCacheConfig::default(),
        }
    }
}

/// JSON file backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCacheConfig {
    /// Path of the JSON document holding every cached key.
    #[serde(default = "default_file_path")]
    pub path: String,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            path: default_file_path(),
        }
    }
}

/// In-memory cache backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries in the cache.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// TTL for in-memory entries in seconds.
    #[serde(default = "default_memory_ttl")]
    pub time_to_live_seconds: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_memory_ttl(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_file_path() -> String {
    "data/seat-draw.json".to_string()
}

fn default_max_capacity() -> u64 {
    64
}

fn default_memory_ttl() -> u64 {
    86_400
}
