//! Loading country boundary geometry.
//!
//! Two datasets are configured: coarse polygons drawn on the coverage map and
//! detailed polygons used to resolve pins to countries.

use std::path::PathBuf;

use async_trait::async_trait;
use coverage_core::CountryIndex;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::SourcesConfig;
use crate::error::{ClientError, Result};
use crate::sources::GeometrySource;

/// Loads one country GeoJSON dataset from a local file or over HTTP.
#[derive(Debug, Clone)]
pub struct GeometryClient {
    http: Client,
    url: String,
    path: Option<PathBuf>,
}

impl GeometryClient {
    /// Client for the map dataset (`geo_path`, else `geo_url`).
    pub fn new(config: SourcesConfig) -> Result<Self> {
        let url = config.geo_url.clone();
        let path = config.geo_path.clone();
        Self::with_location(&config, url, path)
    }

    /// Client for the pin resolution dataset (`lookup_path`, else `lookup_url`).
    pub fn for_lookup(config: SourcesConfig) -> Result<Self> {
        let url = config.lookup_url.clone();
        let path = config.lookup_path.clone();
        Self::with_location(&config, url, path)
    }

    fn with_location(config: &SourcesConfig, url: String, path: Option<PathBuf>) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, url, path })
    }

    async fn fetch(&self) -> Result<CountryIndex> {
        debug!("Fetching country geometry from: {}", self.url);

        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                service: "geometry host",
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let index = CountryIndex::from_geojson_str(&body)?;
        info!("Loaded {} country features from {}", index.len(), self.url);
        Ok(index)
    }
}

#[async_trait]
impl GeometrySource for GeometryClient {
    async fn load_country_geometry(&self) -> Result<CountryIndex> {
        match &self.path {
            Some(path) => {
                let path = path.clone();
                // File I/O and parsing run off the async runtime.
                tokio::task::spawn_blocking(move || CountryIndex::from_path(path))
                    .await?
                    .map_err(ClientError::from)
            }
            None => self.fetch().await,
        }
    }
}
