//! Coordinate to country resolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;
use crate::normalize::normalize_country_name;
use crate::pin::Pin;

/// Axis-aligned latitude/longitude box, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Check whether the point lies inside the box.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lng
            && longitude <= self.max_lng
    }
}

/// Points in here resolve to Greenland unless they are also in [`ICELAND_BOUNDS`].
///
/// The 110m boundary data misclassifies much of Greenland's coast.
pub const GREENLAND_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 59.5,
    max_lat: 83.5,
    min_lng: -73.0,
    max_lng: 12.0,
};

/// Carve-out from [`GREENLAND_BOUNDS`].
pub const ICELAND_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 63.0,
    max_lat: 66.5,
    min_lng: -24.0,
    max_lng: -13.0,
};

const GREENLAND: &str = "Greenland";
const GREENLAND_ISO: &str = "GL";

/// A country resolved from a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCountry {
    pub name: String,
    pub iso_code: Option<String>,
}

impl ResolvedCountry {
    fn greenland(iso_code: Option<&str>) -> Self {
        Self {
            name: GREENLAND.to_string(),
            iso_code: Some(iso_code.unwrap_or(GREENLAND_ISO).to_string()),
        }
    }
}

/// Properties of a country feature returned by a lookup.
///
/// Different boundary datasets spell the same property differently, so the
/// accessors try each known spelling in turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureProperties(Map<String, Value>);

impl FeatureProperties {
    pub fn new(properties: Map<String, Value>) -> Self {
        Self(properties)
    }

    /// First non-empty string value among the given keys.
    pub fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_str))
            .find(|value| !value.is_empty())
    }

    pub fn english_name(&self) -> Option<&str> {
        self.first_str(&["nameEn", "name_en", "NAME_EN"])
    }

    pub fn local_name(&self) -> Option<&str> {
        self.first_str(&["name", "NAME"])
    }

    /// ISO 3166-1 alpha-2 code. Natural Earth's `-99` placeholder is ignored.
    pub fn iso_alpha2(&self) -> Option<&str> {
        self.first_str(&["iso1A2", "iso_1A2", "ISO1_A2", "ISO_A2"])
            .filter(|code| *code != "-99")
    }

    pub fn iso3166_1(&self) -> Option<&str> {
        self.first_str(&["ISO3166-1", "iso3166-1"])
    }
}

impl From<Map<String, Value>> for FeatureProperties {
    fn from(properties: Map<String, Value>) -> Self {
        Self(properties)
    }
}

/// Point-in-country lookup backend.
///
/// Implementations return the properties of the country feature containing
/// the point, or `None` when the point is in no country.
pub trait CountryLookup: Send + Sync {
    fn feature_at(&self, longitude: f64, latitude: f64) -> Result<Option<FeatureProperties>>;
}

impl<T: CountryLookup + ?Sized> CountryLookup for &T {
    fn feature_at(&self, longitude: f64, latitude: f64) -> Result<Option<FeatureProperties>> {
        (**self).feature_at(longitude, latitude)
    }
}

impl<T: CountryLookup + ?Sized> CountryLookup for std::sync::Arc<T> {
    fn feature_at(&self, longitude: f64, latitude: f64) -> Result<Option<FeatureProperties>> {
        (**self).feature_at(longitude, latitude)
    }
}

/// Resolves coordinates to countries using a [`CountryLookup`].
#[derive(Debug, Clone)]
pub struct CountryResolver<L> {
    lookup: L,
}

impl<L: CountryLookup> CountryResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve a coordinate to a country.
    ///
    /// Missing, zero or non-finite coordinates and lookup failures all
    /// yield `None`. Failures are logged, never propagated.
    pub fn resolve(&self, latitude: f64, longitude: f64) -> Option<ResolvedCountry> {
        if !usable(latitude) || !usable(longitude) {
            return None;
        }

        if GREENLAND_BOUNDS.contains(latitude, longitude)
            && !ICELAND_BOUNDS.contains(latitude, longitude)
        {
            return Some(ResolvedCountry::greenland(None));
        }

        let properties = match self.lookup.feature_at(longitude, latitude) {
            Ok(Some(properties)) => properties,
            Ok(None) => {
                debug!("No country at ({}, {})", latitude, longitude);
                return None;
            }
            Err(e) => {
                warn!("Error reverse geocoding ({}, {}): {}", latitude, longitude, e);
                return None;
            }
        };

        Self::from_properties(&properties)
    }

    /// Resolve a pin's coordinates.
    pub fn resolve_pin(&self, pin: &Pin) -> Option<ResolvedCountry> {
        let (latitude, longitude) = pin.coordinates()?;
        self.resolve(latitude, longitude)
    }

    fn from_properties(properties: &FeatureProperties) -> Option<ResolvedCountry> {
        let iso_alpha2 = properties.iso_alpha2();

        if iso_alpha2 == Some(GREENLAND_ISO) || properties.iso3166_1() == Some(GREENLAND_ISO) {
            return Some(ResolvedCountry::greenland(None));
        }

        let name = properties
            .english_name()
            .or_else(|| properties.local_name())?;

        if name.to_lowercase().contains("greenland") {
            return Some(ResolvedCountry::greenland(iso_alpha2));
        }

        Some(ResolvedCountry {
            name: normalize_country_name(name),
            iso_code: iso_alpha2.map(str::to_string),
        })
    }
}

fn usable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverageError;
    use serde_json::json;

    struct FixedLookup(Option<Value>);

    impl CountryLookup for FixedLookup {
        fn feature_at(&self, _: f64, _: f64) -> Result<Option<FeatureProperties>> {
            Ok(self.0.as_ref().and_then(|v| v.as_object().cloned()).map(FeatureProperties::new))
        }
    }

    struct FailingLookup;

    impl CountryLookup for FailingLookup {
        fn feature_at(&self, _: f64, _: f64) -> Result<Option<FeatureProperties>> {
            Err(CoverageError::Lookup("backend unavailable".to_string()))
        }
    }

    fn resolver_with(properties: Value) -> CountryResolver<FixedLookup> {
        CountryResolver::new(FixedLookup(Some(properties)))
    }

    #[test]
    fn test_greenland_override() {
        let resolver = resolver_with(json!({"nameEn": "Canada", "iso1A2": "CA"}));
        assert_eq!(
            resolver.resolve(61.0, -45.0),
            Some(ResolvedCountry {
                name: "Greenland".to_string(),
                iso_code: Some("GL".to_string()),
            })
        );
    }

    #[test]
    fn test_iceland_not_forced_to_greenland() {
        let resolver = resolver_with(json!({"nameEn": "Iceland", "iso1A2": "IS"}));
        let country = resolver.resolve(64.9, -19.0).unwrap();
        assert_eq!(country.name, "Iceland");
        assert_eq!(country.iso_code.as_deref(), Some("IS"));
    }

    #[test]
    fn test_prefers_english_name_and_normalizes() {
        let resolver = resolver_with(json!({
            "nameEn": "Russian Federation",
            "name": "Россия",
            "iso1A2": "RU"
        }));
        let country = resolver.resolve(55.75, 37.61).unwrap();
        assert_eq!(country.name, "Russia");
        assert_eq!(country.iso_code.as_deref(), Some("RU"));
    }

    #[test]
    fn test_alternate_property_spellings() {
        let resolver = resolver_with(json!({"NAME": "Kingdom of Spain", "ISO_A2": "ES"}));
        let country = resolver.resolve(40.4, -3.7).unwrap();
        assert_eq!(country.name, "Spain");
        assert_eq!(country.iso_code.as_deref(), Some("ES"));

        let resolver = resolver_with(json!({"name_en": "Norway", "ISO_A2": "-99"}));
        let country = resolver.resolve(59.0, 20.0).unwrap();
        assert_eq!(country.name, "Norway");
        assert_eq!(country.iso_code, None);
    }

    #[test]
    fn test_greenland_by_iso_or_name() {
        let resolver = resolver_with(json!({"name": "Somewhere", "ISO3166-1": "GL"}));
        assert_eq!(resolver.resolve(10.0, 10.0).unwrap().name, "Greenland");

        let resolver = resolver_with(json!({"nameEn": "Greenland (Denmark)", "iso1A2": "DK"}));
        let country = resolver.resolve(10.0, 10.0).unwrap();
        assert_eq!(country.name, "Greenland");
        assert_eq!(country.iso_code.as_deref(), Some("DK"));
    }

    #[test]
    fn test_unusable_coordinates() {
        let resolver = resolver_with(json!({"nameEn": "France"}));
        assert_eq!(resolver.resolve(f64::NAN, 2.0), None);
        assert_eq!(resolver.resolve(48.0, f64::INFINITY), None);
        assert_eq!(resolver.resolve(0.0, 2.0), None);
        assert_eq!(resolver.resolve_pin(&Pin::default()), None);
    }

    #[test]
    fn test_no_feature_or_no_name() {
        let resolver = CountryResolver::new(FixedLookup(None));
        assert_eq!(resolver.resolve(10.0, 10.0), None);

        let resolver = resolver_with(json!({"iso1A2": "FR"}));
        assert_eq!(resolver.resolve(10.0, 10.0), None);
    }

    #[test]
    fn test_lookup_failure_is_swallowed() {
        let resolver = CountryResolver::new(FailingLookup);
        assert_eq!(resolver.resolve(48.85, 2.35), None);
    }
}
