//! Static profile source.

use std::collections::HashMap;

use async_trait::async_trait;
use worldmappin_client::{hive_avatar_url, HiveProfile, ProfileMetadata, ProfileSource, Result};

/// A profile source backed by in-memory profiles.
#[derive(Debug, Clone, Default)]
pub struct StaticProfiles {
    profiles: HashMap<String, HiveProfile>,
}

impl StaticProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing account. The avatar falls back to the Hive image proxy.
    pub fn with_profile(mut self, username: impl Into<String>, profile: ProfileMetadata) -> Self {
        let username = username.into();
        let picture = profile
            .profile_image
            .clone()
            .unwrap_or_else(|| hive_avatar_url(&username));
        self.profiles
            .insert(username, HiveProfile::found(profile, picture));
        self
    }

    /// Register an account with an explicit lookup result.
    pub fn with_raw(mut self, username: impl Into<String>, profile: HiveProfile) -> Self {
        self.profiles.insert(username.into(), profile);
        self
    }
}

#[async_trait]
impl ProfileSource for StaticProfiles {
    async fn fetch_profile(&self, username: &str) -> Result<HiveProfile> {
        Ok(self
            .profiles
            .get(username)
            .cloned()
            .unwrap_or_else(HiveProfile::not_found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_profile() {
        let source = StaticProfiles::new().with_profile(
            "alice",
            ProfileMetadata {
                name: Some("Alice".to_string()),
                ..Default::default()
            },
        );

        let profile = source.fetch_profile("alice").await.unwrap();
        assert!(profile.exists);
        assert_eq!(
            profile.profile_picture.as_deref(),
            Some("https://images.hive.blog/u/alice/avatar")
        );
    }

    #[tokio::test]
    async fn test_unknown_profile_does_not_exist() {
        let profile = StaticProfiles::new().fetch_profile("ghost").await.unwrap();
        assert!(!profile.exists);
        assert!(profile.profile.is_none());
    }
}
