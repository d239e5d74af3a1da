//! Where the résumé document comes from. Every fetch bypasses caches.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use tracing::debug;

use crate::loader::LoadError;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the raw document bytes, always bypassing any cached copy.
    async fn fetch(&self) -> Result<Bytes, LoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Fetches the document over HTTP.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Bytes, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Bytes, LoadError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;
        debug!("Read {} bytes from {}", body.len(), self.path.display());
        Ok(Bytes::from(body))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
