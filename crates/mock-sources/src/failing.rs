//! A source that fails every call.

use async_trait::async_trait;
use coverage_core::{CountryIndex, Pin};
use worldmappin_client::{
    ClientError, GeometrySource, HiveProfile, PinSource, ProfileSource, Result, UserStats,
};

/// Fails every request with a 503 status error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl FailingSource {
    pub fn new() -> Self {
        Self
    }

    fn error() -> ClientError {
        ClientError::Status {
            service: "mock",
            status: 503,
        }
    }
}

#[async_trait]
impl PinSource for FailingSource {
    async fn fetch_user_pins(&self, _username: &str) -> Result<Vec<Pin>> {
        Err(Self::error())
    }

    async fn user_stats(&self, _username: &str) -> Result<UserStats> {
        Err(Self::error())
    }
}

#[async_trait]
impl ProfileSource for FailingSource {
    async fn fetch_profile(&self, _username: &str) -> Result<HiveProfile> {
        Err(Self::error())
    }
}

#[async_trait]
impl GeometrySource for FailingSource {
    async fn load_country_geometry(&self) -> Result<CountryIndex> {
        Err(Self::error())
    }
}
