//! WorldMapPin HTTP client.

use async_trait::async_trait;
use coverage_core::Pin;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::SourcesConfig;
use crate::error::{ClientError, Result};
use crate::sources::{PinSource, UserStats};

/// Client for the pin service.
#[derive(Debug, Clone)]
pub struct WorldMapPinClient {
    http: Client,
    config: SourcesConfig,
}

impl WorldMapPinClient {
    /// Create a client for the configured pin service.
    pub fn new(config: SourcesConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("worldmappin/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                service: "pin service",
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PinSource for WorldMapPinClient {
    async fn fetch_user_pins(&self, username: &str) -> Result<Vec<Pin>> {
        let pins: Vec<Pin> = self.get_json(&self.config.user_pins_url(username)).await?;
        debug!("Fetched {} pins for {}", pins.len(), username);
        Ok(pins)
    }

    async fn user_stats(&self, username: &str) -> Result<UserStats> {
        self.get_json(&self.config.user_stats_url(username)).await
    }
}
