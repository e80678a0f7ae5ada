//! Persistence for the single [`Document`].
//!
//! A backend only knows how to hand out the whole document and how to replace
//! it. It never merges: `save` is a full overwrite and must be all-or-nothing.

mod file;
mod memory;
#[cfg(feature = "object-store")]
mod object;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::document::Document;
use crate::errors::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "object-store")]
pub use object::ObjectStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Current persisted document. A backend with no document yet creates and
    /// persists the empty default before returning it.
    async fn load(&self) -> Result<Document, StoreError>;

    /// Replace the persisted document with `doc`.
    async fn save(&self, doc: &Document) -> Result<(), StoreError>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}

/// Open the backend selected by `config`.
pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config {
        StorageConfig::File { path } => Arc::new(FileStore::open(path).await?),
        #[cfg(feature = "object-store")]
        StorageConfig::Object {
            url,
            bearer_token,
            timeout_secs,
        } => Arc::new(ObjectStore::new(
            url.clone(),
            bearer_token.clone(),
            std::time::Duration::from_secs(*timeout_secs),
        )?),
        #[cfg(not(feature = "object-store"))]
        StorageConfig::Object { .. } => {
            anyhow::bail!("object storage support was not compiled in (feature `object-store`)")
        }
        StorageConfig::Memory => Arc::new(MemoryStore::new()),
    };

    tracing::info!("Document store ready: {}", store.describe());
    Ok(store)
}
