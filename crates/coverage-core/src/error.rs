//! Error types for coverage operations.

use thiserror::Error;

/// Errors that can occur while loading geometry or resolving countries.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// The GeoJSON document could not be parsed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a geometry file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document parsed but is not a country FeatureCollection.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A country lookup backend failed.
    #[error("Lookup failed: {0}")]
    Lookup(String),
}

/// Result type for coverage operations.
pub type Result<T> = std::result::Result<T, CoverageError>;
