//! Backend failures while loading or saving the document.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Local file could not be read, written or renamed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Object storage could not be reached
    #[error("Object storage request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Object storage answered with an unexpected status
    #[error("Object storage returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Persisted body is not a valid document
    #[error("Invalid document: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
