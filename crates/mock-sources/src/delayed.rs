//! Source wrapper that adds latency.

use std::time::Duration;

use async_trait::async_trait;
use coverage_core::Pin;
use worldmappin_client::{HiveProfile, PinSource, ProfileSource, Result, UserStats};

/// Wraps another source and sleeps before every call.
///
/// Pair with `#[tokio::test(start_paused = true)]` to check which calls run
/// concurrently without depending on wall-clock time.
#[derive(Debug, Clone)]
pub struct Delayed<S> {
    inner: S,
    delay: Duration,
}

impl<S> Delayed<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<S: PinSource> PinSource for Delayed<S> {
    async fn fetch_user_pins(&self, username: &str) -> Result<Vec<Pin>> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch_user_pins(username).await
    }

    async fn user_stats(&self, username: &str) -> Result<UserStats> {
        tokio::time::sleep(self.delay).await;
        self.inner.user_stats(username).await
    }
}

#[async_trait]
impl<S: ProfileSource> ProfileSource for Delayed<S> {
    async fn fetch_profile(&self, username: &str) -> Result<HiveProfile> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch_profile(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StaticPins, StaticProfiles};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_adds_delay() {
        let source = Delayed::new(
            StaticPins::new().with_user("alice", vec![Pin::at(1.0, 1.0)]),
            Duration::from_millis(50),
        );

        let start = Instant::now();
        let pins = source.fetch_user_pins("alice").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(pins.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delays_profiles() {
        let source = Delayed::new(StaticProfiles::new(), Duration::from_secs(2));

        let start = Instant::now();
        let profile = source.fetch_profile("ghost").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert!(!profile.exists);
    }
}
