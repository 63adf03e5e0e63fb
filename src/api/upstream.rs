use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{ProxyError, Result};
use crate::models::ParameterSet;

/// Plain HTTP client for the upstream API. Knows nothing about caching.
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GETs `url` with `params` as the query string and parses the body as JSON.
    pub async fn fetch(&self, url: &str, params: &ParameterSet) -> Result<serde_json::Value> {
        debug!("Sending request to {} with {} params", url, params.len());
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream {} returned {}", url, status);
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let json = serde_json::from_slice(&bytes)?;
        Ok(json)
    }
}
