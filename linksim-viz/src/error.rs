//! Error types for visualization.

use thiserror::Error;

/// Errors related to chart generation.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("Invalid plot configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Rendering error: {0}")]
    RenderingError(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}
