//! Single-server FIFO queue simulation.
//!
//! The engine is event-driven rather than fixed-increment: at every step it
//! holds exactly two candidate events, the next arrival and the departure of
//! the packet currently in service, and advances the clock to whichever comes
//! first. Arrivals win ties; arrival and departure processing commute on the
//! state at equal timestamps in a single-server FIFO model, so the tie-break
//! only fixes the bookkeeping order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dists::{ArrivalPattern, PoissonArrivals, ServiceTimeDistribution};
use crate::error::SimError;
use crate::packet::Packet;

/// Default cap on admitted packets, guaranteeing termination even under
/// pathological parameters.
pub const DEFAULT_MAX_PACKETS: u64 = 2_000_000;

/// Validated parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Packet arrival rate in packets/second. Zero disables arrivals.
    pub arrival_rate: f64,
    /// Simulation horizon in seconds.
    pub sim_time: f64,
    /// Cap on the number of packets admitted.
    pub max_packets: u64,
    /// Seed for this run's random streams.
    pub seed: u64,
}

impl SimulationConfig {
    /// Create a configuration with the default packet cap.
    pub fn new(arrival_rate: f64, sim_time: f64, seed: u64) -> Self {
        Self {
            arrival_rate,
            sim_time,
            max_packets: DEFAULT_MAX_PACKETS,
            seed,
        }
    }

    /// Override the admitted-packet cap.
    pub fn with_max_packets(mut self, max_packets: u64) -> Self {
        self.max_packets = max_packets;
        self
    }

    fn validate(&self) -> Result<(), SimError> {
        if !self.arrival_rate.is_finite() || self.arrival_rate < 0.0 {
            return Err(SimError::Configuration(format!(
                "arrival rate must be finite and non-negative, got {}",
                self.arrival_rate
            )));
        }
        if !self.sim_time.is_finite() || self.sim_time <= 0.0 {
            return Err(SimError::Configuration(format!(
                "simulation horizon must be finite and positive, got {}",
                self.sim_time
            )));
        }
        Ok(())
    }
}

/// The server's two-state machine.
///
/// `Serving` carries the packet occupying the server together with its
/// scheduled departure time, so "server busy", "current packet" and "finite
/// departure time" cannot drift apart.
#[derive(Debug)]
enum ServerState {
    Idle,
    Serving { packet: Packet, departure: f64 },
}

impl ServerState {
    fn departure_time(&self) -> f64 {
        match self {
            ServerState::Idle => f64::INFINITY,
            ServerState::Serving { departure, .. } => *departure,
        }
    }
}

/// Completed packets from one run, in completion order.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    completed: Vec<Packet>,
}

impl SimulationResult {
    /// Total delay (departure minus arrival) per completed packet, in
    /// completion order.
    pub fn total_delays(&self) -> Vec<f64> {
        self.completed.iter().filter_map(Packet::total_delay).collect()
    }

    /// Queueing delay (start of service minus arrival) per completed packet,
    /// in completion order.
    pub fn queueing_delays(&self) -> Vec<f64> {
        self.completed.iter().map(Packet::queueing_delay).collect()
    }

    /// The completed packets themselves, read-only.
    pub fn packets(&self) -> &[Packet] {
        &self.completed
    }

    /// Number of packets that completed service within the horizon.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no packet completed service.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

/// Simulates a single-server FIFO queue over a bounded time horizon.
///
/// One simulator instance corresponds to one run: it owns the arrival
/// process (Poisson by default, seeded from the configuration) and all
/// transient queue state lives on the stack of [`QueueSimulator::run`].
pub struct QueueSimulator {
    config: SimulationConfig,
    arrivals: Option<Box<dyn ArrivalPattern>>,
}

impl QueueSimulator {
    /// Create a simulator for the given configuration.
    ///
    /// A zero arrival rate is valid and means no arrivals are ever
    /// scheduled; the run then produces an empty result.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let arrivals: Option<Box<dyn ArrivalPattern>> = if config.arrival_rate > 0.0 {
            Some(Box::new(PoissonArrivals::new(
                config.arrival_rate,
                config.seed,
            )))
        } else {
            None
        };
        Ok(Self { config, arrivals })
    }

    /// Replace the Poisson arrival process with a custom pattern.
    pub fn with_arrival_pattern(mut self, pattern: impl ArrivalPattern + 'static) -> Self {
        self.arrivals = Some(Box::new(pattern));
        self
    }

    /// Run the simulation to completion.
    ///
    /// The loop stops when the clock would pass the horizon or when the
    /// number of admitted packets reaches the configured cap, whichever
    /// comes first. A packet still in service when the horizon is reached is
    /// not counted as completed.
    pub fn run(&mut self, service: &mut dyn ServiceTimeDistribution) -> SimulationResult {
        let sim_time = self.config.sim_time;
        let mut t = 0.0_f64;
        let mut next_arrival = match self.arrivals.as_mut() {
            Some(arrivals) => arrivals.next_interarrival(),
            None => f64::INFINITY,
        };
        let mut line: VecDeque<Packet> = VecDeque::new();
        let mut server = ServerState::Idle;
        let mut completed: Vec<Packet> = Vec::new();
        let mut admitted: u64 = 0;

        while t < sim_time && admitted < self.config.max_packets {
            let departure = server.departure_time();
            if next_arrival <= departure && next_arrival <= sim_time {
                // Arrival event.
                t = next_arrival;
                let mut packet = Packet::new(t);
                admitted += 1;
                if matches!(server, ServerState::Idle) {
                    packet.enter_service(t);
                    let departure = t + service.sample();
                    server = ServerState::Serving { packet, departure };
                } else {
                    line.push_back(packet);
                }
                if let Some(arrivals) = self.arrivals.as_mut() {
                    next_arrival = t + arrivals.next_interarrival();
                }
            } else {
                // Departure event.
                if departure > sim_time {
                    // Horizon reached while serving; the in-flight packet
                    // does not count as completed.
                    break;
                }
                t = departure;
                if let ServerState::Serving { mut packet, .. } =
                    std::mem::replace(&mut server, ServerState::Idle)
                {
                    packet.complete(t);
                    completed.push(packet);
                }
                if let Some(mut packet) = line.pop_front() {
                    packet.enter_service(t);
                    let departure = t + service.sample();
                    server = ServerState::Serving { packet, departure };
                }
            }
        }

        debug!(
            admitted,
            completed = completed.len(),
            final_time = t,
            "simulation run finished"
        );

        SimulationResult { completed }
    }
}

/// Run one simulation with an explicit seed.
///
/// This is a convenience wrapper over [`QueueSimulator`] matching the shape
/// of the experiment runner's needs: Poisson arrivals at `arrival_rate`, the
/// supplied service-time distribution, and a bounded horizon.
pub fn simulate(
    arrival_rate: f64,
    service: &mut dyn ServiceTimeDistribution,
    sim_time: f64,
    max_packets: u64,
    seed: u64,
) -> Result<SimulationResult, SimError> {
    let config = SimulationConfig::new(arrival_rate, sim_time, seed).with_max_packets(max_packets);
    Ok(QueueSimulator::new(config)?.run(service))
}
