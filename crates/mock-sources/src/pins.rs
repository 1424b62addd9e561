//! Static pin source.

use std::collections::HashMap;

use async_trait::async_trait;
use coverage_core::Pin;
use worldmappin_client::{PinSource, Result, UserStats};

#[derive(Debug, Clone, Default)]
struct UserPins {
    pins: Vec<Pin>,
    pin_count: Option<u64>,
    rank: Option<u64>,
}

/// A pin source backed by in-memory data.
///
/// Unknown users have no pins, a pin count of zero and no rank.
#[derive(Debug, Clone, Default)]
pub struct StaticPins {
    users: HashMap<String, UserPins>,
}

impl StaticPins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `pins` for `username`. The pin count defaults to the pin total.
    pub fn with_user(mut self, username: impl Into<String>, pins: Vec<Pin>) -> Self {
        self.users.entry(username.into()).or_default().pins = pins;
        self
    }

    /// Override the reported pin count and rank for `username`.
    pub fn with_stats(mut self, username: impl Into<String>, pin_count: u64, rank: Option<u64>) -> Self {
        let user = self.users.entry(username.into()).or_default();
        user.pin_count = Some(pin_count);
        user.rank = rank;
        self
    }
}

#[async_trait]
impl PinSource for StaticPins {
    async fn fetch_user_pins(&self, username: &str) -> Result<Vec<Pin>> {
        Ok(self
            .users
            .get(username)
            .map(|user| user.pins.clone())
            .unwrap_or_default())
    }

    async fn user_stats(&self, username: &str) -> Result<UserStats> {
        Ok(self
            .users
            .get(username)
            .map(|user| UserStats {
                pin_count: user.pin_count.unwrap_or(user.pins.len() as u64),
                rank: user.rank,
            })
            .unwrap_or_default())
    }
}
