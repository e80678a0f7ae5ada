use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::document::Document;
use crate::errors::StoreError;

/// Keeps the document in process memory only. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: RwLock<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Document, StoreError> {
        Ok(self.doc.read().await.clone())
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        *self.doc.write().await = doc.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
