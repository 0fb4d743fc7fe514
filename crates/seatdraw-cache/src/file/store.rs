//! JSON file cache implementation.
//!
//! Every key lives in one JSON object on disk. The document is read once,
//! kept in memory, and rewritten in full on each mutation via a temporary
//! file and a rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use seatdraw_core::config::FileCacheConfig;
use seatdraw_core::error::{AppError, ErrorKind};
use seatdraw_core::result::AppResult;
use seatdraw_core::traits::cache::CacheProvider;

type Document = BTreeMap<String, String>;

/// Cache provider persisting entries to a single JSON file.
#[derive(Debug)]
pub struct FileCacheProvider {
    /// Location of the JSON document.
    path: PathBuf,
    /// Loaded document, `None` until first access.
    entries: Mutex<Option<Document>>,
}

impl FileCacheProvider {
    /// Create a provider for the configured path. Nothing is read yet.
    pub fn new(config: &FileCacheConfig) -> Self {
        Self::at(&config.path)
    }

    /// Create a provider for an explicit path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Mutex::new(None),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> AppResult<Document> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Document::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    format!("Corrupt cache file '{}': {e}", self.path.display()),
                    e,
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Cache file absent, starting empty");
                Ok(Document::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, doc: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), keys = doc.len(), "Cache file written");
        Ok(())
    }

    /// Load the document into `slot` on first access.
    ///
    /// With `recover` set, an unreadable document is replaced by an empty
    /// one so the next write overwrites it.
    async fn loaded<'a>(
        &self,
        slot: &'a mut Option<Document>,
        recover: bool,
    ) -> AppResult<&'a mut Document> {
        if slot.is_none() {
            let doc = match self.read_document().await {
                Ok(doc) => doc,
                Err(e) if recover => {
                    warn!(path = %self.path.display(), error = %e, "Discarding unreadable cache file");
                    Document::new()
                }
                Err(e) => return Err(e),
            };
            info!(path = %self.path.display(), keys = doc.len(), "Cache file loaded");
            *slot = Some(doc);
        }
        Ok(slot.get_or_insert_with(Document::new))
    }
}

#[async_trait]
impl CacheProvider for FileCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut guard = self.entries.lock().await;
        let doc = self.loaded(&mut guard, false).await?;
        Ok(doc.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut guard = self.entries.lock().await;
        let doc = self.loaded(&mut guard, true).await?;
        doc.insert(key.to_string(), value.to_string());
        self.write_document(doc).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut guard = self.entries.lock().await;
        let doc = self.loaded(&mut guard, true).await?;
        if doc.remove(key).is_some() {
            self.write_document(doc).await?;
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut guard = self.entries.lock().await;
        let doc = self.loaded(&mut guard, false).await?;
        Ok(doc.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut guard = self.entries.lock().await;
        Ok(self.loaded(&mut guard, false).await.is_ok())
    }

    async fn flush_all(&self) -> AppResult<()> {
        let mut guard = self.entries.lock().await;
        let doc = self.loaded(&mut guard, true).await?;
        doc.clear();
        self.write_document(doc).await
    }
}
