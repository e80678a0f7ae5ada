use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use super::DocumentStore;
use crate::document::Document;
use crate::errors::StoreError;

/// A JSON object in remote object storage, addressed by URL.
///
/// Nothing is cached: every load fetches the object and every save uploads
/// the whole body. Works with anything that serves GET and accepts PUT on the
/// same URL (S3-compatible buckets, presigned URLs, MinIO).
#[derive(Debug, Clone)]
pub struct ObjectStore {
    client: Client,
    url: String,
    bearer_token: Option<String>,
}

impl ObjectStore {
    pub fn new(
        url: String,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            bearer_token,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http(Box::new(err))
    }
}

#[async_trait]
impl DocumentStore for ObjectStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let response = self.authorize(self.client.get(&self.url)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                tracing::info!("No object at {}, creating an empty document", self.url);
                let doc = Document::default();
                self.save(&doc).await?;
                Ok(doc)
            }
            status if status.is_success() => {
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            status => Err(StoreError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            }),
        }
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(doc)?;
        let response = self
            .authorize(self.client.put(&self.url))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        tracing::debug!("Uploaded document to {}", self.url);
        Ok(())
    }

    fn describe(&self) -> String {
        format!("object:{}", self.url)
    }
}
