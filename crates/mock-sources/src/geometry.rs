//! Static geometry source.

use async_trait::async_trait;
use coverage_core::CountryIndex;
use worldmappin_client::{GeometrySource, Result};

/// Serves a country index parsed once from a GeoJSON string.
#[derive(Debug, Clone)]
pub struct StaticGeometry {
    index: CountryIndex,
}

impl StaticGeometry {
    pub fn new(index: CountryIndex) -> Self {
        Self { index }
    }

    /// Parse a GeoJSON FeatureCollection.
    pub fn from_geojson(text: &str) -> Result<Self> {
        Ok(Self::new(CountryIndex::from_geojson_str(text)?))
    }
}

#[async_trait]
impl GeometrySource for StaticGeometry {
    async fn load_country_geometry(&self) -> Result<CountryIndex> {
        Ok(self.index.clone())
    }
}
