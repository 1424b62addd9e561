//! Source traits and the records they return.
//!
//! Each external collaborator sits behind a trait so that the HTTP clients
//! can be swapped for fixtures in tests.

use async_trait::async_trait;
use coverage_core::{CountryIndex, Pin};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Profile fields a Hive account publishes in its metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Result of a profile lookup. A missing account is `exists == false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HiveProfile {
    pub exists: bool,
    pub profile: Option<ProfileMetadata>,
    pub profile_picture: Option<String>,
}

impl HiveProfile {
    /// An account that does not exist.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// An existing account.
    pub fn found(profile: ProfileMetadata, profile_picture: impl Into<String>) -> Self {
        Self {
            exists: true,
            profile: Some(profile),
            profile_picture: Some(profile_picture.into()),
        }
    }
}

/// Pin count and rank for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default, alias = "pin_count")]
    pub pin_count: u64,
    #[serde(default)]
    pub rank: Option<u64>,
}

/// Source of a user's pins and pin statistics.
#[async_trait]
pub trait PinSource: Send + Sync {
    /// All pins a user has posted.
    async fn fetch_user_pins(&self, username: &str) -> Result<Vec<Pin>>;

    /// Pin count and rank in one request.
    async fn user_stats(&self, username: &str) -> Result<UserStats>;

    /// Number of pins a user has posted.
    async fn user_pin_count(&self, username: &str) -> Result<u64> {
        Ok(self.user_stats(username).await?.pin_count)
    }

    /// The user's leaderboard rank, if ranked.
    async fn user_rank(&self, username: &str) -> Result<Option<u64>> {
        Ok(self.user_stats(username).await?.rank)
    }
}

/// Source of user profile data.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<HiveProfile>;
}

/// Source of country boundary geometry.
#[async_trait]
pub trait GeometrySource: Send + Sync {
    async fn load_country_geometry(&self) -> Result<CountryIndex>;
}
