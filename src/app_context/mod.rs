use std::sync::Arc;

use tokio::sync::Mutex;

use crate::document::Document;
use crate::errors::CoreError;
use crate::store::DocumentStore;

mod todo_operations;
mod user_operations;

/// Shared application context handed to every resolver.
///
/// Owns the store handle. Mutations run load, change and save while holding
/// `write_lock`, so writers in this process never race each other; reads go
/// straight to the store.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<dyn DocumentStore>,
    write_lock: Arc<Mutex<()>>,
}

impl AppContext {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Backend name and location, as logged at startup.
    pub fn storage_description(&self) -> String {
        self.store.describe()
    }

    pub async fn snapshot(&self) -> Result<Document, CoreError> {
        Ok(self.store.load().await?)
    }

    /// Apply `change` to a fresh copy of the document and persist it.
    ///
    /// Nothing is saved when `change` fails, and the change's result is only
    /// returned once the save has succeeded.
    async fn mutate<T, F>(&self, change: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Document) -> Result<T, CoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.store.load().await?;
        let result = change(&mut doc)?;
        self.store.save(&doc).await?;

        Ok(result)
    }
}
