//! Visualization for linksim sweep results.
//!
//! This crate renders the delay-versus-utilization comparison (simulated
//! M/M/1, simulated M/D/1, analytic M/M/1) as a static chart using the
//! plotters library.

pub mod charts;
pub mod error;

pub use error::VizError;
