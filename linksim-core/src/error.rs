//! Error types for the simulation engine.

use thiserror::Error;

/// Top-level error type for simulation operations.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid utilization {rho}: must lie strictly inside (0, 1)")]
    InvalidUtilization { rho: f64 },
}
