//! Error types for external source clients.

use coverage_core::CoverageError;
use thiserror::Error;

/// Errors that can occur when talking to an external source.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("{service} returned status {status}")]
    Status { service: &'static str, status: u16 },

    /// JSON-RPC error response from the Hive API.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Country geometry could not be loaded.
    #[error("Geometry error: {0}")]
    Geometry(#[from] CoverageError),

    /// A blocking loader task failed.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, ClientError>;
