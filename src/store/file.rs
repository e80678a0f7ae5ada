use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::document::Document;
use crate::errors::StoreError;

/// Local JSON file, read once when opened and kept resident.
///
/// Reads are served from the cache. Every save rewrites the whole file through
/// a temporary sibling and a rename, and only then updates the cache, so a
/// failed save leaves both the file and the cache as they were.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<Document>,
}

impl FileStore {
    /// Read `path`, creating it with an empty document when it does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No document at {}, creating an empty one", path.display());
                let doc = Document::default();
                write_atomically(&path, &doc).await?;
                doc
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        tracing::debug!(
            "Loaded {} users and {} todos from {}",
            doc.users.len(),
            doc.todos.len(),
            path.display()
        );

        Ok(Self {
            path,
            cache: RwLock::new(doc),
        })
    }

    /// Read the document at `path` without creating it or keeping a cache.
    pub async fn read_existing(path: impl AsRef<Path>) -> Result<Document, StoreError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| StoreError::io(path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        Ok(self.cache.read().await.clone())
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        // Holding the write guard across the rename keeps saves from interleaving.
        let mut cache = self.cache.write().await;
        write_atomically(&self.path, doc).await?;
        *cache = doc.clone();
        tracing::debug!("Saved document to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

async fn write_atomically(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(doc)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }

    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, &json)
        .await
        .map_err(|e| StoreError::io(&tmp, e))?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(StoreError::io(path, e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "document.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn open_creates_default_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("db.json");

        let store = FileStore::open(&path).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Document::default());

        let on_disk: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "users": [], "todos": [] }));
    }

    #[tokio::test]
    async fn save_then_reopen_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        let store = FileStore::open(&path).await.unwrap();
        let mut doc = store.load().await.unwrap();
        let user = doc
            .signup("Ada".to_string(), "a@x.com".to_string())
            .unwrap();
        doc.add_todo(user.id, "buy milk".to_string());
        store.save(&doc).await.unwrap();

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(reopened.load().await.unwrap(), doc);
        assert!(!tmp_path(&path).exists());
    }

    #[tokio::test]
    async fn read_existing_does_not_create_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        let err = FileStore::read_existing(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn read_existing_returns_saved_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = FileStore::open(&path).await.unwrap();
        let mut doc = store.load().await.unwrap();
        doc.add_todo("u1".to_string(), "t".to_string());
        store.save(&doc).await.unwrap();

        assert_eq!(FileStore::read_existing(&path).await.unwrap(), doc);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn failed_save_keeps_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let store = FileStore::open(&path).await.unwrap();

        // A directory in place of the temp file makes the write fail.
        std::fs::create_dir(tmp_path(&path)).unwrap();

        let mut doc = store.load().await.unwrap();
        doc.add_todo("u1".to_string(), "t".to_string());
        assert!(store.save(&doc).await.is_err());

        assert_eq!(store.load().await.unwrap(), Document::default());
    }
}
