//! HTTP client for the narrative and alerts feeds.

use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::state::{NarrativeSummary, TradeAlert};
use reqwest::Client;
use serde::de::{DeserializeOwned, Error as _};

use super::converter::{AlertPayload, DataConverter, NarrativePayload};

#[cfg(test)]
use mockall::automock;

/// A source of feed data.
///
/// Implementations return one of the fetch-failure errors
/// (see [`Error::is_fetch_failure`]) when a feed cannot be read.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current trending narrative.
    async fn fetch_narrative(&self) -> Result<NarrativeSummary>;

    /// Fetch the latest trade alerts, in feed order.
    async fn fetch_alerts(&self) -> Result<Vec<TradeAlert>>;
}

/// Builder for creating a feed client.
pub struct FeedClientBuilder {
    config: FeedConfig,
    user_agent: String,
}

impl FeedClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: FeedConfig::default(),
            user_agent: format!("alpha-radar/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the feed configuration.
    pub fn config(mut self, config: FeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the feed client.
    pub fn build(self) -> Result<FeedClient> {
        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(FeedClient {
            narrative_url: self.config.narrative_endpoint(),
            alerts_url: self.config.alerts_endpoint(),
            http: builder.build()?,
        })
    }
}

impl Default for FeedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// reqwest-backed [`FeedSource`].
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    narrative_url: String,
    alerts_url: String,
}

impl FeedClient {
    /// Create a client for the endpoints in `config`.
    pub fn new(config: FeedConfig) -> Result<Self> {
        FeedClientBuilder::new().config(config).build()
    }

    /// Narrative feed URL.
    pub fn narrative_url(&self) -> &str {
        &self.narrative_url
    }

    /// Alerts feed URL.
    pub fn alerts_url(&self) -> &str {
        &self.alerts_url
    }

    /// GET `url` and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(url, status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl FeedSource for FeedClient {
    async fn fetch_narrative(&self) -> Result<NarrativeSummary> {
        let value: serde_json::Value = self.get_json(&self.narrative_url).await?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("narrative feed did not return an object").into());
        }

        let payload: NarrativePayload = serde_json::from_value(value)?;
        Ok(DataConverter::convert_narrative(payload))
    }

    async fn fetch_alerts(&self) -> Result<Vec<TradeAlert>> {
        let payload: Vec<AlertPayload> = self.get_json(&self.alerts_url).await?;
        Ok(DataConverter::convert_alerts(payload))
    }
}
