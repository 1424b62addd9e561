//! Pin records as served by the pin service.
//!
//! Two coordinate schemes exist in the wild: the current nested
//! `json_metadata.location` object and the legacy flat `lattitude` /
//! `longitude` fields. The misspelling is part of the stored data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user-submitted geographic pin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Post author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Post permlink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permlink: Option<String>,

    /// Post title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Post metadata carrying the current location scheme.
    #[serde(
        default,
        deserialize_with = "lenient_metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub json_metadata: Option<PinMetadata>,

    /// Legacy latitude field.
    #[serde(
        default,
        deserialize_with = "lenient_coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub lattitude: Option<f64>,

    /// Legacy longitude field.
    #[serde(
        default,
        deserialize_with = "lenient_coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
}

/// Metadata attached to a pin's post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PinLocation>,
}

/// Nested location object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PinLocation {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
}

impl Pin {
    /// Create a pin using the nested location scheme.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            json_metadata: Some(PinMetadata {
                location: Some(PinLocation {
                    latitude: Some(latitude),
                    longitude: Some(longitude),
                }),
            }),
            ..Default::default()
        }
    }

    /// Create a pin using the legacy flat fields.
    pub fn legacy(latitude: f64, longitude: f64) -> Self {
        Self {
            lattitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    /// Extract `(latitude, longitude)`.
    ///
    /// Each component prefers the nested location and falls back to the
    /// legacy field when the nested value is missing, zero or NaN. Returns
    /// `None` when either component is unavailable.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let location = self
            .json_metadata
            .as_ref()
            .and_then(|metadata| metadata.location);

        let latitude = usable(location.and_then(|l| l.latitude)).or(usable(self.lattitude))?;
        let longitude = usable(location.and_then(|l| l.longitude)).or(usable(self.longitude))?;
        Some((latitude, longitude))
    }
}

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Accept a coordinate as a JSON number or a numeric string.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept metadata as an object or as a JSON-encoded string.
///
/// Malformed metadata is dropped rather than failing the whole pin.
fn lenient_metadata<'de, D>(deserializer: D) -> Result<Option<PinMetadata>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => serde_json::from_str(&s).ok(),
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}
