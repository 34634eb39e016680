use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::models::FixtureBatch;

/// Client for our own `/fixtures` endpoint, used by the fixture browser
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the current fixture batch from the proxy
    pub async fn fetch_fixtures(&self) -> Result<FixtureBatch> {
        let url = format!("{}/fixtures", self.base_url);

        info!("Fetching fixtures from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to reach fixture proxy")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Fixture proxy error: {} - {}", status, text);
        }

        let batch: FixtureBatch = response
            .json()
            .await
            .context("Failed to parse fixture proxy response")?;

        Ok(batch)
    }
}
