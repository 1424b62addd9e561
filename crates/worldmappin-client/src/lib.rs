//! External source clients for WorldMapPin profiles.
//!
//! This crate provides async clients for the collaborators a profile page
//! depends on, each behind a trait:
//!
//! - [`PinSource`] - A user's pins, pin count and rank ([`WorldMapPinClient`]).
//! - [`ProfileSource`] - Profile metadata from the Hive blockchain ([`HiveClient`]).
//! - [`GeometrySource`] - Country boundary polygons ([`GeometryClient`]).
//!
//! # Example
//!
//! ```no_run
//! use worldmappin_client::{HiveClient, ProfileSource, SourcesConfig};
//!
//! # async fn example() -> worldmappin_client::Result<()> {
//! let config = SourcesConfig::from_env()?;
//! let hive = HiveClient::new(config)?;
//!
//! let profile = hive.fetch_profile("alice").await?;
//! if !profile.exists {
//!     println!("No such account");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod hive;
pub mod pins;
pub mod sources;

pub use config::SourcesConfig;
pub use error::{ClientError, Result};
pub use geometry::GeometryClient;
pub use hive::{hive_avatar_url, profile_from_accounts, HiveAccount, HiveClient};
pub use pins::WorldMapPinClient;
pub use sources::{
    GeometrySource, HiveProfile, PinSource, ProfileMetadata, ProfileSource, UserStats,
};

// Re-export async_trait for implementors
pub use async_trait::async_trait;
