use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::RawFixture;

/// Client for the AllSportsAPI football feed
pub struct AllSportsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Response envelope; `result` is missing when the range has no events
#[derive(Debug, Deserialize)]
struct FixturesEnvelope {
    #[serde(default)]
    result: Option<Vec<RawFixture>>,
}

impl AllSportsClient {
    /// Create a new AllSportsAPI client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch fixtures scheduled between `from` and `to` (inclusive)
    ///
    /// Returns `None` when the upstream sends no result list.
    pub async fn fetch_fixtures(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Option<Vec<RawFixture>>> {
        let from = from.format("%Y-%m-%d").to_string();
        let to = to.format("%Y-%m-%d").to_string();

        // Keep the key out of logs
        debug!(
            "Fetching fixtures from {}/?met=Fixtures&from={}&to={}",
            self.base_url, from, to
        );

        let url = format!(
            "{}/?met=Fixtures&from={}&to={}&APIkey={}",
            self.base_url,
            from,
            to,
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to fetch fixtures from AllSportsAPI")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("AllSportsAPI error: {} - {}", status, text);
        }

        let envelope: FixturesEnvelope = response
            .json()
            .await
            .context("Failed to parse AllSportsAPI fixtures response")?;

        info!(
            "AllSportsAPI returned {} fixtures for {} .. {}",
            envelope.result.as_ref().map(Vec::len).unwrap_or(0),
            from,
            to
        );

        Ok(envelope.result)
    }
}
