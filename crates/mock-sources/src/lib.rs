//! Mock source implementations for WorldMapPin views.
//!
//! This crate provides in-memory implementations of the source traits for
//! testing without network access:
//! - `StaticPins` - Serves fixed pins, pin counts and ranks per user
//! - `StaticProfiles` - Serves fixed Hive profiles; unknown users do not exist
//! - `StaticGeometry` - Serves a country index parsed from a GeoJSON string
//! - `FailingSource` - Fails every call, for error-path tests
//! - `Delayed` - Wraps another pin or profile source with artificial latency
//!
//! For production use, see the `worldmappin-client` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_sources::{Pin, PinSource, StaticPins};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_sources::ClientError> {
//!     let pins = StaticPins::new().with_user("alice", vec![Pin::at(48.85, 2.35)]);
//!
//!     let fetched = pins.fetch_user_pins("alice").await?;
//!     assert_eq!(fetched.len(), 1);
//!     Ok(())
//! }
//! ```

mod delayed;
mod failing;
mod geometry;
mod pins;
mod profiles;

// Re-export source types for convenience
pub use coverage_core::{CountryIndex, Pin};
pub use worldmappin_client::{
    async_trait, ClientError, GeometrySource, HiveProfile, PinSource, ProfileMetadata,
    ProfileSource, UserStats,
};

pub use delayed::Delayed;
pub use failing::FailingSource;
pub use geometry::StaticGeometry;
pub use pins::StaticPins;
pub use profiles::StaticProfiles;
