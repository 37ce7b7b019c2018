//! Core discrete event simulation engine for a single-server link.
//!
//! This crate provides the building blocks for simulating queueing delay on
//! one communication link: packet timestamps, service-time distributions,
//! seeded randomness, and the event-driven simulation loop itself.
//!
//! # Architecture Overview
//!
//! The engine is built around two types:
//!
//! - [`QueueSimulator`]: runs one discrete-event simulation of a FIFO
//!   single-server queue over a bounded horizon and returns the observed
//!   per-packet delays.
//!
//! - [`SimulationConfig`]: the validated parameters for one run (arrival
//!   rate, horizon, packet cap, seed).
//!
//! Unlike a general event calendar, the loop only ever tracks two candidate
//! events (the next arrival and the departure of the packet in service), so
//! the scheduler is an explicit two-state machine rather than a priority
//! queue.
//!
//! # Basic Usage
//!
//! ```
//! use linksim_core::dists::ConstantServiceTime;
//! use linksim_core::{QueueSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::new(50.0, 10.0, 42);
//! let mut simulator = QueueSimulator::new(config).unwrap();
//! let mut service = ConstantServiceTime::new(0.01);
//!
//! let result = simulator.run(&mut service);
//! assert_eq!(result.total_delays().len(), result.queueing_delays().len());
//! ```
//!
//! # Time Model
//!
//! All timestamps are plain `f64` seconds of simulation time (not wall-clock
//! time). The two event candidates use `f64::INFINITY` as the "not scheduled"
//! sentinel; these sentinels never appear in the returned delay samples.

pub mod dists;
pub mod error;
pub mod logging;
pub mod packet;
pub mod randomness;
pub mod simulator;

pub use error::SimError;
pub use logging::{init_simulation_logging, init_simulation_logging_with_level};
pub use packet::Packet;
pub use simulator::{
    simulate, QueueSimulator, SimulationConfig, SimulationResult, DEFAULT_MAX_PACKETS,
};
