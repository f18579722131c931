use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed: status {0}")]
    Status(reqwest::StatusCode),
}

/// Seam between the poll loop and the network, so tests can script
/// responses instead of standing up a backend.
#[async_trait]
pub trait ApiFetcher: Send + Sync {
    /// GET `path` relative to the backend base URL; returns the body only
    /// for a success status.
    async fn get(&self, path: &str) -> Result<String, FetchError>;
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ApiFetcher for HttpFetcher {
    async fn get(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
