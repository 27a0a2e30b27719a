use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, error};

use super::errors::CatalogError;

/// Transport that retrieves the raw feed document
#[async_trait]
pub trait FeedFetcher: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CatalogError>;
}

/// Fetches the feed with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    client: reqwest::Client,
}

impl HttpFeedFetcher {
    pub fn new(timeout: Duration) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(CatalogError::from_reqwest)?;

        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy, TLS, shared pool)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        debug!("Fetching feed from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CatalogError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Feed request failed - Status: {}, URL: {}", status, url);
            return Err(CatalogError::from_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(CatalogError::from_reqwest)?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
