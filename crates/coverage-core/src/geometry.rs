//! In-process country boundary index.
//!
//! Loads a GeoJSON FeatureCollection of country polygons (e.g. Natural Earth
//! 110m) and answers point-in-country queries. The same index backs both the
//! reverse geocoder and the list of countries drawn on the coverage map.

use std::path::Path;

use geo::{BoundingRect, Contains, Geometry, MultiPolygon, Point, Rect};
use geojson::{FeatureCollection, GeoJson};
use tracing::{debug, info};

use crate::error::{CoverageError, Result};
use crate::resolver::{CountryLookup, FeatureProperties};

/// A single country feature.
#[derive(Debug, Clone)]
pub struct CountryFeature {
    pub properties: FeatureProperties,
    pub geometry: MultiPolygon<f64>,
    bounds: Rect<f64>,
}

impl CountryFeature {
    /// Name used by the map for this feature.
    pub fn display_name(&self) -> Option<&str> {
        feature_display_name(&self.properties)
    }

    fn contains(&self, point: Point<f64>) -> bool {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        let in_bounds =
            point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y;
        in_bounds && self.geometry.contains(&point)
    }
}

/// Name a map dataset feature is rendered under.
pub fn feature_display_name(properties: &FeatureProperties) -> Option<&str> {
    properties.first_str(&["name", "NAME", "ADMIN"])
}

/// Point-in-polygon index over country features.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    features: Vec<CountryFeature>,
}

impl CountryIndex {
    /// Parse a GeoJSON document.
    pub fn from_geojson_str(text: &str) -> Result<Self> {
        match text.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => Ok(Self::from_feature_collection(collection)),
            other => Err(CoverageError::InvalidGeometry(format!(
                "expected a FeatureCollection, got {}",
                geojson_kind(&other)
            ))),
        }
    }

    /// Read and parse a GeoJSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let index = Self::from_geojson_str(&text)?;
        info!(
            "Loaded {} country features from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Build the index from a parsed collection.
    ///
    /// Features without Polygon or MultiPolygon geometry are skipped.
    pub fn from_feature_collection(collection: FeatureCollection) -> Self {
        let mut features = Vec::with_capacity(collection.features.len());

        for feature in collection.features {
            let properties = FeatureProperties::new(feature.properties.unwrap_or_default());

            let Some(geometry) = feature.geometry else {
                debug!("Skipping feature without geometry: {:?}", feature_display_name(&properties));
                continue;
            };

            let geometry = match Geometry::<f64>::try_from(geometry.value) {
                Ok(Geometry::Polygon(polygon)) => MultiPolygon::new(vec![polygon]),
                Ok(Geometry::MultiPolygon(multi)) => multi,
                Ok(_) => {
                    debug!("Skipping non-polygon feature: {:?}", feature_display_name(&properties));
                    continue;
                }
                Err(e) => {
                    debug!("Skipping unconvertible feature: {}", e);
                    continue;
                }
            };

            let Some(bounds) = geometry.bounding_rect() else {
                continue;
            };

            features.push(CountryFeature {
                properties,
                geometry,
                bounds,
            });
        }

        Self { features }
    }

    /// First feature containing the point.
    pub fn feature_containing(&self, longitude: f64, latitude: f64) -> Option<&CountryFeature> {
        let point = Point::new(longitude, latitude);
        self.features.iter().find(|feature| feature.contains(point))
    }

    /// Map names of all features, in dataset order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().filter_map(CountryFeature::display_name)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl CountryLookup for CountryIndex {
    fn feature_at(&self, longitude: f64, latitude: f64) -> Result<Option<FeatureProperties>> {
        Ok(self
            .feature_containing(longitude, latitude)
            .map(|feature| feature.properties.clone()))
    }
}

fn geojson_kind(geojson: &GeoJson) -> &'static str {
    match geojson {
        GeoJson::Geometry(_) => "a Geometry",
        GeoJson::Feature(_) => "a Feature",
        GeoJson::FeatureCollection(_) => "a FeatureCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Square", "ISO_A2": "SQ"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}
            },
            {
                "type": "Feature",
                "properties": {"NAME": "Islands"},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[20,20],[22,20],[22,22],[20,22],[20,20]]],
                    [[[30,30],[32,30],[32,32],[30,32],[30,30]]]
                ]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Capital"},
                "geometry": {"type": "Point", "coordinates": [5, 5]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Nowhere"},
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_loads_polygon_features_only() {
        let index = CountryIndex::from_geojson_str(FIXTURE).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["Square", "Islands"]);
    }

    #[test]
    fn test_point_lookup() {
        let index = CountryIndex::from_geojson_str(FIXTURE).unwrap();

        let square = index.feature_at(5.0, 5.0).unwrap().unwrap();
        assert_eq!(square.iso_alpha2(), Some("SQ"));

        let islands = index.feature_at(31.0, 31.0).unwrap().unwrap();
        assert_eq!(islands.local_name(), Some("Islands"));

        assert!(index.feature_at(25.0, 25.0).unwrap().is_none());
        assert!(index.feature_at(-5.0, 5.0).unwrap().is_none());
    }

    #[test]
    fn test_rejects_non_collection() {
        let result = CountryIndex::from_geojson_str(
            r#"{"type": "Point", "coordinates": [1, 2]}"#,
        );
        assert!(matches!(result, Err(CoverageError::InvalidGeometry(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = CountryIndex::from_geojson_str("{not geojson");
        assert!(matches!(result, Err(CoverageError::GeoJson(_))));
    }
}
