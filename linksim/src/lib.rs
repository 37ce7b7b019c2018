//! # Linksim - single-server link delay analyzer
//!
//! Linksim simulates queueing delay on one communication link and compares
//! the measurements against closed-form M/M/1 formulas across a sweep of
//! utilization levels.
//!
//! ## Quick Start
//!
//! ```
//! use linksim::prelude::*;
//!
//! let config = SweepConfig {
//!     rho_values: vec![0.25, 0.5, 0.75],
//!     seed: 42,
//!     ..SweepConfig::default()
//! };
//! let table = run_sweep(&config).unwrap();
//! assert_eq!(table.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `viz`: chart rendering via plotters

// Re-export members (core and metrics are always available)
pub use linksim_core as core;

pub use linksim_metrics as metrics;

#[cfg(feature = "viz")]
pub use linksim_viz as viz;

// Convenience re-exports of commonly used items
pub mod prelude {
    //! Commonly used types and traits

    pub use linksim_core::dists::{
        ConstantServiceTime, ExponentialServiceTime, ServiceTimeDistribution,
    };
    pub use linksim_core::{
        simulate, QueueSimulator, SimError, SimulationConfig, SimulationResult,
    };

    pub use linksim_metrics::{run_sweep, Delay, ExperimentRow, ExperimentTable, SweepConfig};
}
