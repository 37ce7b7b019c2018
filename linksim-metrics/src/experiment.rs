//! Utilization sweep comparing simulated and analytic queueing delay.
//!
//! For each target utilization the runner derives the arrival and service
//! rates from the link parameters, simulates an M/M/1 and an M/D/1 instance
//! of the queue, and places the sample means next to the closed-form M/M/1
//! values in one [`ExperimentRow`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use linksim_core::dists::{ConstantServiceTime, ExponentialServiceTime};
use linksim_core::randomness::derive_seed;
use linksim_core::{QueueSimulator, SimError, SimulationConfig};

use crate::delay::Delay;
use crate::stats::{mean_delay, mean_queueing_delay};

/// Configuration for one utilization sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Packet size in bytes.
    pub packet_size_bytes: f64,
    /// Link bandwidth in bits per second.
    pub bandwidth_bps: f64,
    /// Target utilization values, each strictly inside (0, 1).
    pub rho_values: Vec<f64>,
    /// Simulation horizon per run, in seconds.
    pub sim_time: f64,
    /// Base seed; each run derives its own independent stream from it.
    pub seed: u64,
}

impl Default for SweepConfig {
    /// A 1500-byte packet on a 10 Mbps link, swept from 0.05 to 0.95.
    fn default() -> Self {
        Self {
            packet_size_bytes: 1_500.0,
            bandwidth_bps: 10_000_000.0,
            rho_values: (1..20).map(|i| i as f64 / 20.0).collect(),
            sim_time: 120.0,
            seed: 0,
        }
    }
}

impl SweepConfig {
    /// Link-layer service rate mu, in packets/second.
    pub fn service_rate(&self) -> f64 {
        self.bandwidth_bps / (self.packet_size_bytes * 8.0)
    }

    fn validate(&self) -> Result<(), SimError> {
        if !self.packet_size_bytes.is_finite() || self.packet_size_bytes <= 0.0 {
            return Err(SimError::Configuration(format!(
                "packet size must be positive, got {}",
                self.packet_size_bytes
            )));
        }
        if !self.bandwidth_bps.is_finite() || self.bandwidth_bps <= 0.0 {
            return Err(SimError::Configuration(format!(
                "bandwidth must be positive, got {}",
                self.bandwidth_bps
            )));
        }
        if !self.sim_time.is_finite() || self.sim_time <= 0.0 {
            return Err(SimError::Configuration(format!(
                "simulation horizon must be positive, got {}",
                self.sim_time
            )));
        }
        for &rho in &self.rho_values {
            if !rho.is_finite() || rho <= 0.0 || rho >= 1.0 {
                return Err(SimError::InvalidUtilization { rho });
            }
        }
        Ok(())
    }
}

/// One comparison row of the sweep.
///
/// Field order is the documented export column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRow {
    /// Target utilization.
    pub rho: f64,
    /// Derived arrival rate lambda, packets/second.
    pub arrival_rate_pkts_s: f64,
    /// Derived service rate mu, packets/second.
    pub service_rate_pkts_s: f64,
    /// Mean transmission (service) time, seconds.
    pub tx_delay_s: f64,
    /// Simulated mean total delay, exponential service.
    pub sim_total_mm1_s: Delay,
    /// Simulated mean queueing delay, exponential service.
    pub sim_queue_mm1_s: Delay,
    /// Simulated mean total delay, deterministic service.
    pub sim_total_md1_s: Delay,
    /// Simulated mean queueing delay, deterministic service.
    pub sim_queue_md1_s: Delay,
    /// Analytic M/M/1 mean total delay.
    pub analytic_mm1_total_s: Delay,
    /// Analytic M/M/1 mean queueing delay.
    pub analytic_mm1_queue_s: Delay,
}

/// Ordered, append-only collection of sweep rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentTable {
    rows: Vec<ExperimentRow>,
}

impl ExperimentTable {
    /// The rows, in sweep order.
    pub fn rows(&self) -> &[ExperimentRow] {
        &self.rows
    }

    /// Append a row; rows keep their insertion order.
    pub fn push(&mut self, row: ExperimentRow) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Analytic M/M/1 mean total and queueing delay.
///
/// For `lambda >= mu` the queue is unstable (or critically loaded) and both
/// means diverge.
pub fn analytic_mm1(arrival_rate: f64, service_rate: f64) -> (Delay, Delay) {
    if arrival_rate < service_rate {
        let rho = arrival_rate / service_rate;
        let spare = service_rate - arrival_rate;
        (Delay::Finite(1.0 / spare), Delay::Finite(rho / spare))
    } else {
        (Delay::Infinite, Delay::Infinite)
    }
}

/// Run the full utilization sweep.
///
/// Fails fast on malformed global configuration; a failure while processing
/// one utilization value is logged and skipped so the remaining values still
/// produce rows.
#[instrument(skip(config), fields(points = config.rho_values.len()))]
pub fn run_sweep(config: &SweepConfig) -> Result<ExperimentTable, SimError> {
    config.validate()?;

    let service_rate = config.service_rate();
    let service_time_mean = 1.0 / service_rate;

    let mut table = ExperimentTable::default();
    for (index, &rho) in config.rho_values.iter().enumerate() {
        match run_row(config, index as u64, rho, service_rate, service_time_mean) {
            Ok(row) => table.push(row),
            Err(err) => warn!(rho, %err, "skipping utilization value"),
        }
    }

    Ok(table)
}

fn run_row(
    config: &SweepConfig,
    index: u64,
    rho: f64,
    service_rate: f64,
    service_time_mean: f64,
) -> Result<ExperimentRow, SimError> {
    let arrival_rate = rho * service_rate;
    debug!(rho, arrival_rate, service_rate, "running utilization point");

    let mm1_config = SimulationConfig::new(
        arrival_rate,
        config.sim_time,
        derive_seed(config.seed, "mm1-arrivals", index),
    );
    let mut mm1_service =
        ExponentialServiceTime::new(service_rate, derive_seed(config.seed, "mm1-service", index));
    let mm1 = QueueSimulator::new(mm1_config)?.run(&mut mm1_service);

    let md1_config = SimulationConfig::new(
        arrival_rate,
        config.sim_time,
        derive_seed(config.seed, "md1-arrivals", index),
    );
    let mut md1_service = ConstantServiceTime::new(service_time_mean);
    let md1 = QueueSimulator::new(md1_config)?.run(&mut md1_service);

    let (analytic_total, analytic_queue) = analytic_mm1(arrival_rate, service_rate);

    Ok(ExperimentRow {
        rho,
        arrival_rate_pkts_s: arrival_rate,
        service_rate_pkts_s: service_rate,
        tx_delay_s: service_time_mean,
        sim_total_mm1_s: mean_delay(&mm1.total_delays()),
        sim_queue_mm1_s: mean_queueing_delay(&mm1.queueing_delays()),
        sim_total_md1_s: mean_delay(&md1.total_delays()),
        sim_queue_md1_s: mean_queueing_delay(&md1.queueing_delays()),
        analytic_mm1_total_s: analytic_total,
        analytic_mm1_queue_s: analytic_queue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytic_mm1_stable() {
        // mu = 833.33 pkts/s, rho = 0.5: total delay is 1/(mu - lambda).
        let mu = 10_000_000.0 / (1_500.0 * 8.0);
        let lambda = 0.5 * mu;

        let (total, queue) = analytic_mm1(lambda, mu);
        let total = total.as_f64().unwrap();
        let queue = queue.as_f64().unwrap();

        assert!((total - 0.0024).abs() < 1e-6);
        assert!((queue - 0.0012).abs() < 1e-6);
    }

    #[test]
    fn test_analytic_mm1_unstable_is_infinite() {
        assert_eq!(analytic_mm1(10.0, 10.0), (Delay::Infinite, Delay::Infinite));
        assert_eq!(analytic_mm1(20.0, 10.0), (Delay::Infinite, Delay::Infinite));
    }

    #[test]
    fn test_sweep_config_derives_service_rate() {
        let config = SweepConfig::default();
        assert!((config.service_rate() - 833.3333333).abs() < 1e-6);
    }

    #[test]
    fn test_sweep_rejects_rho_outside_unit_interval() {
        for bad in [0.0, 1.0, 1.5, -0.1] {
            let config = SweepConfig {
                rho_values: vec![0.5, bad],
                ..SweepConfig::default()
            };
            assert!(run_sweep(&config).is_err(), "rho = {bad} should be rejected");
        }
    }

    #[test]
    fn test_sweep_rejects_non_positive_bandwidth() {
        let config = SweepConfig {
            bandwidth_bps: 0.0,
            ..SweepConfig::default()
        };
        assert!(run_sweep(&config).is_err());
    }

    #[test]
    fn test_zero_completion_run_yields_undefined_and_zero() {
        // A horizon far too short to finish a single 1.2 ms service.
        let config = SweepConfig {
            rho_values: vec![0.05],
            sim_time: 1e-6,
            seed: 9,
            ..SweepConfig::default()
        };

        let table = run_sweep(&config).unwrap();
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];

        assert_eq!(row.sim_total_mm1_s, Delay::Undefined);
        assert_eq!(row.sim_queue_mm1_s, Delay::Finite(0.0));
        assert_eq!(row.sim_total_md1_s, Delay::Undefined);
        assert_eq!(row.sim_queue_md1_s, Delay::Finite(0.0));
    }
}
