//! Error types for result aggregation and export.

use thiserror::Error;

/// Errors related to table export and import.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
