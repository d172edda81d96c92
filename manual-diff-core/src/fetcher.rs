//! Manual download

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{ManualError, Result};

/// Retrieves the raw bytes behind a URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain GET with the client's default timeout and redirect behaviour.
/// No headers, no retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ManualError::Client { message: e.to_string() })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ManualError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManualError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ManualError::transport(url, e.to_string()))?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
