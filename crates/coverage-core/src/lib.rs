//! Country resolution and world coverage for WorldMapPin profiles.
//!
//! This crate turns a user's geographic pins into the data behind the
//! profile page's "world coverage" section:
//!
//! - [`CountryResolver`] - Maps a coordinate to a country via a [`CountryLookup`].
//! - [`normalize_country_name`] - Canonicalizes official names to the map's naming.
//! - [`is_country_visited`] - Reconciles a map country name with the visited set.
//! - [`CoverageData`] - Visited countries, per-country counts and the ranking list.
//! - [`CountryIndex`] - Point-in-polygon lookup over a GeoJSON country dataset.
//! - [`shade_map`] - Per-feature visited flags and pin counts for the choropleth.
//!
//! # Example
//!
//! ```rust,no_run
//! use coverage_core::{CountryIndex, CountryResolver, CoverageData, Pin};
//!
//! # fn example(geojson: &str, pins: Vec<Pin>) -> coverage_core::Result<()> {
//! let index = CountryIndex::from_geojson_str(geojson)?;
//! let resolver = CountryResolver::new(&index);
//!
//! let coverage = CoverageData::from_pins(&pins, &resolver);
//! println!(
//!     "{} countries ({}%)",
//!     coverage.total_visited,
//!     coverage.coverage_percentage()
//! );
//! # Ok(())
//! # }
//! ```

mod choropleth;
mod coverage;
mod error;
mod geometry;
mod matcher;
mod normalize;
mod pin;
mod resolver;

pub use choropleth::{coverage_summary, display_username, shade_map, CountryShade};
pub use coverage::{coverage_percentage, CountryListEntry, CoverageData, TOTAL_COUNTRIES};
pub use error::{CoverageError, Result};
pub use geometry::{feature_display_name, CountryFeature, CountryIndex};
pub use matcher::{country_pin_count, is_country_visited, is_drc_variant, words_overlap};
pub use normalize::{normalize_country_name, COUNTRY_ALIASES};
pub use pin::{Pin, PinLocation, PinMetadata};
pub use resolver::{
    BoundingBox, CountryLookup, CountryResolver, FeatureProperties, ResolvedCountry,
    GREENLAND_BOUNDS, ICELAND_BOUNDS,
};
