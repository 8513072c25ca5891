//! HTTP client for the flight events feed.
//!
//! The feed is a single endpoint serving the full event list as a JSON
//! array; there is no pagination or filtering upstream, so every search
//! fetches the whole list and leaves relevance filtering to the engine.

use tracing::{debug, warn};

use crate::domain::FlightEvent;

use super::error::FeedError;
use super::source::EventSource;
use super::types::RawFlightEvent;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the flight events endpoint
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP-backed flight event source.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }
}

impl EventSource for FeedClient {
    async fn list_events(&self) -> Result<Vec<FlightEvent>, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "flight events feed returned error status");
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let raw: Vec<RawFlightEvent> =
            response.json().await.map_err(|e| FeedError::Decode {
                message: e.to_string(),
            })?;

        let events = raw
            .into_iter()
            .map(FlightEvent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = events.len(), "fetched flight events");
        Ok(events)
    }
}
