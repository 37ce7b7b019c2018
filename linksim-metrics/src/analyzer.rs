//! Closed-form analysis of a parameter-form record.
//!
//! The upstream input surface (sliders and numeric fields) hands over a flat
//! record of named scalars plus a selector for which delay components to
//! evaluate. The analysis itself is pure: validate, then apply the closed
//! forms from [`crate::formulas`].

use serde::{Deserialize, Serialize};

use linksim_core::SimError;

use crate::delay::Delay;
use crate::formulas::{congestion_delay, transmission_delay};

/// Which delay components the caller asked to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayType {
    Transmission,
    Congestion,
    Both,
}

/// The flat record of link parameters collected upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkParameters {
    /// Packet size in bytes.
    pub packet_size_bytes: f64,
    /// Link bandwidth in megabits per second.
    pub bandwidth_mbps: f64,
    /// Number of packets waiting (queue length for the congestion formula).
    pub num_packets: u64,
    /// Average packet arrival rate, packets/second.
    pub arrival_rate_pps: f64,
    /// Average packet service rate, packets/second.
    pub service_rate_pps: f64,
    /// Which delay components to evaluate.
    pub delay_type: DelayType,
}

impl LinkParameters {
    /// Packet size in bits.
    pub fn packet_size_bits(&self) -> f64 {
        self.packet_size_bytes * 8.0
    }

    /// Bandwidth in bits per second.
    pub fn bandwidth_bps(&self) -> f64 {
        self.bandwidth_mbps * 1_000_000.0
    }

    fn validate(&self) -> Result<(), SimError> {
        if !self.packet_size_bytes.is_finite() || self.packet_size_bytes <= 0.0 {
            return Err(SimError::Configuration(format!(
                "packet size must be positive, got {}",
                self.packet_size_bytes
            )));
        }
        if !self.bandwidth_mbps.is_finite() || self.bandwidth_mbps <= 0.0 {
            return Err(SimError::Configuration(format!(
                "bandwidth must be positive, got {}",
                self.bandwidth_mbps
            )));
        }
        if !self.arrival_rate_pps.is_finite() || self.arrival_rate_pps <= 0.0 {
            return Err(SimError::Configuration(format!(
                "arrival rate must be positive, got {}",
                self.arrival_rate_pps
            )));
        }
        if !self.service_rate_pps.is_finite() || self.service_rate_pps <= 0.0 {
            return Err(SimError::Configuration(format!(
                "service rate must be positive, got {}",
                self.service_rate_pps
            )));
        }
        Ok(())
    }
}

/// Per-component results for one parameter record; components the caller did
/// not select are absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkAnalysis {
    pub transmission: Option<Delay>,
    pub congestion: Option<Delay>,
}

/// Validate the record and evaluate the selected closed forms.
pub fn analyze(params: &LinkParameters) -> Result<LinkAnalysis, SimError> {
    params.validate()?;

    let transmission = matches!(params.delay_type, DelayType::Transmission | DelayType::Both)
        .then(|| transmission_delay(params.packet_size_bits(), params.bandwidth_bps()));
    let congestion = matches!(params.delay_type, DelayType::Congestion | DelayType::Both).then(
        || {
            congestion_delay(
                params.num_packets as f64,
                params.arrival_rate_pps,
                params.service_rate_pps,
            )
        },
    );

    Ok(LinkAnalysis {
        transmission,
        congestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> LinkParameters {
        LinkParameters {
            packet_size_bytes: 512.0,
            bandwidth_mbps: 100.0,
            num_packets: 1_000,
            arrival_rate_pps: 200.0,
            service_rate_pps: 500.0,
            delay_type: DelayType::Both,
        }
    }

    #[test]
    fn test_analyze_both_components() {
        let analysis = analyze(&sample_params()).unwrap();

        let transmission = analysis.transmission.unwrap().as_f64().unwrap();
        assert!((transmission - 512.0 * 8.0 / 100_000_000.0).abs() < 1e-15);

        let congestion = analysis.congestion.unwrap().as_f64().unwrap();
        assert!((congestion - 1_000.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_respects_selector() {
        let mut params = sample_params();
        params.delay_type = DelayType::Transmission;

        let analysis = analyze(&params).unwrap();
        assert!(analysis.transmission.is_some());
        assert!(analysis.congestion.is_none());
    }

    #[test]
    fn test_analyze_saturated_service_is_infinite() {
        let mut params = sample_params();
        params.service_rate_pps = params.arrival_rate_pps;

        let analysis = analyze(&params).unwrap();
        assert_eq!(analysis.congestion, Some(Delay::Infinite));
    }

    #[test]
    fn test_analyze_rejects_non_positive_bandwidth() {
        let mut params = sample_params();
        params.bandwidth_mbps = 0.0;

        assert!(analyze(&params).is_err());
    }

    #[test]
    fn test_parameters_json_round_trip() {
        let params = sample_params();
        let json = serde_json::to_string(&params).unwrap();
        let back: LinkParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
