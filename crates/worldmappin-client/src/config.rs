//! Configuration for the external sources.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

/// Default base URL of the pin service.
pub const DEFAULT_PIN_API_URL: &str = "https://worldmappin.com";

/// Default Hive JSON-RPC endpoint.
pub const DEFAULT_HIVE_API_URL: &str = "https://api.hive.blog";

/// Natural Earth 110m country polygons, drawn on the coverage map.
pub const DEFAULT_GEO_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

/// Natural Earth 10m country polygons, used to resolve pins.
///
/// Includes microstates and detailed coastlines the 110m set lacks.
pub const DEFAULT_LOOKUP_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_10m_admin_0_countries.geojson";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the external sources live.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    /// Base URL of the pin service.
    pub pin_api_url: String,

    /// Hive JSON-RPC endpoint.
    pub hive_api_url: String,

    /// URL of the country geometry GeoJSON drawn on the map.
    pub geo_url: String,

    /// Local GeoJSON file; takes precedence over `geo_url` when set.
    pub geo_path: Option<PathBuf>,

    /// URL of the country geometry GeoJSON used to resolve pins.
    pub lookup_url: String,

    /// Local GeoJSON file; takes precedence over `lookup_url` when set.
    pub lookup_path: Option<PathBuf>,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            pin_api_url: DEFAULT_PIN_API_URL.to_string(),
            hive_api_url: DEFAULT_HIVE_API_URL.to_string(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            geo_path: None,
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            lookup_path: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourcesConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `WORLDMAPPIN_API_URL` - Pin service base URL (default: https://worldmappin.com)
    /// - `HIVE_API_URL` - Hive JSON-RPC endpoint (default: https://api.hive.blog)
    /// - `COVERAGE_GEO_URL` - Country GeoJSON URL (default: Natural Earth 110m)
    /// - `COVERAGE_GEO_PATH` - Local country GeoJSON file (overrides the URL)
    /// - `COVERAGE_LOOKUP_URL` - Pin resolution GeoJSON URL (default: Natural Earth 10m)
    /// - `COVERAGE_LOOKUP_PATH` - Local pin resolution GeoJSON file (overrides the URL)
    /// - `SOURCES_TIMEOUT_SECS` - HTTP timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let pin_api_url = env::var("WORLDMAPPIN_API_URL").unwrap_or(defaults.pin_api_url);
        let hive_api_url = env::var("HIVE_API_URL").unwrap_or(defaults.hive_api_url);
        let geo_url = env::var("COVERAGE_GEO_URL").unwrap_or(defaults.geo_url);

        let geo_path = path_var("COVERAGE_GEO_PATH");
        let lookup_url = env::var("COVERAGE_LOOKUP_URL").unwrap_or(defaults.lookup_url);
        let lookup_path = path_var("COVERAGE_LOOKUP_PATH");

        let timeout = env::var("SOURCES_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let config = Self {
            pin_api_url,
            hive_api_url,
            geo_url,
            geo_path,
            lookup_url,
            lookup_path,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the pin service base URL.
    pub fn with_pin_api_url(mut self, url: impl Into<String>) -> Self {
        self.pin_api_url = url.into();
        self
    }

    /// Set the Hive JSON-RPC endpoint.
    pub fn with_hive_api_url(mut self, url: impl Into<String>) -> Self {
        self.hive_api_url = url.into();
        self
    }

    /// Set the country geometry URL.
    pub fn with_geo_url(mut self, url: impl Into<String>) -> Self {
        self.geo_url = url.into();
        self
    }

    /// Load country geometry from a local file instead of the URL.
    pub fn with_geo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.geo_path = Some(path.into());
        self
    }

    /// Set the pin resolution geometry URL.
    pub fn with_lookup_url(mut self, url: impl Into<String>) -> Self {
        self.lookup_url = url.into();
        self
    }

    /// Load pin resolution geometry from a local file instead of the URL.
    pub fn with_lookup_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lookup_path = Some(path.into());
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that every URL parses.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("WORLDMAPPIN_API_URL", &self.pin_api_url),
            ("HIVE_API_URL", &self.hive_api_url),
            ("COVERAGE_GEO_URL", &self.geo_url),
            ("COVERAGE_LOOKUP_URL", &self.lookup_url),
        ] {
            Url::parse(value)
                .map_err(|e| ClientError::Config(format!("{} '{}': {}", name, value, e)))?;
        }
        Ok(())
    }

    /// URL of a user's pin list.
    pub fn user_pins_url(&self, username: &str) -> String {
        format!(
            "{}/api/users/{}/pins",
            self.pin_api_url.trim_end_matches('/'),
            urlencoding::encode(username)
        )
    }

    /// URL of a user's pin count and rank.
    pub fn user_stats_url(&self, username: &str) -> String {
        format!(
            "{}/api/users/{}/stats",
            self.pin_api_url.trim_end_matches('/'),
            urlencoding::encode(username)
        )
    }
}

fn path_var(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SourcesConfig::default();
        assert_eq!(config.pin_api_url, DEFAULT_PIN_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.geo_path.is_none());
        assert_eq!(config.lookup_url, DEFAULT_LOOKUP_URL);
        assert!(config.lookup_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SourcesConfig::default()
            .with_pin_api_url("http://localhost:3000/")
            .with_geo_path("/tmp/countries.geojson")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(
            config.user_pins_url("alice"),
            "http://localhost:3000/api/users/alice/pins"
        );
        assert_eq!(
            config.user_stats_url("bob smith"),
            "http://localhost:3000/api/users/bob%20smith/stats"
        );
        assert_eq!(config.geo_path, Some(PathBuf::from("/tmp/countries.geojson")));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_lookup_dataset_is_separate_from_map() {
        let config = SourcesConfig::default()
            .with_geo_path("/data/ne_110m.geojson")
            .with_lookup_path("/data/ne_10m.geojson");

        assert_eq!(config.geo_path, Some(PathBuf::from("/data/ne_110m.geojson")));
        assert_eq!(config.lookup_path, Some(PathBuf::from("/data/ne_10m.geojson")));
        assert_ne!(config.geo_url, config.lookup_url);

        let config = config.with_lookup_url("not a url");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = SourcesConfig::default().with_hive_api_url("not a url");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }
}
