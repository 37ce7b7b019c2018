//! Structured logging for simulation debugging.
//!
//! Logging uses `tracing` throughout the workspace. Level guidelines:
//! - TRACE: per-event processing detail (very verbose)
//! - DEBUG: per-run and per-utilization-point decisions
//! - INFO: sweep progress and important milestones
//! - WARN: skipped rows or unusual conditions
//!
//! Output is controlled through `RUST_LOG` as usual, e.g.
//! `RUST_LOG=linksim_core=debug cargo run --example delay_sweep`.

use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the simulation with sensible defaults.
pub fn init_simulation_logging() {
    init_simulation_logging_with_level("info")
}

/// Initialize logging with a specific level.
///
/// # Arguments
/// * `level` - Log level: "trace", "debug", "info", "warn", or "error"
pub fn init_simulation_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("linksim_core={level},linksim_core::simulator=debug,linksim_metrics={level}").into()
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    info!("Simulation logging initialized at level: {}", level);
}
