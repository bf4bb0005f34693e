// HTTP standings source - reqwest client for the ESPN and Sportsnet APIs
use crate::application::standings_source::StandingsSource;
use crate::error::FetchError;
use crate::infrastructure::config::UpstreamSettings;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpStandingsSource {
    client: reqwest::Client,
}

impl HttpStandingsSource {
    pub fn new(settings: &UpstreamSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl StandingsSource for HttpStandingsSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let status = response.status();
        tracing::debug!("{} fetched - status: {}", url, status);

        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), url));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::decode(url, e.to_string()))
    }
}
