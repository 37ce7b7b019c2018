//! Closed-form delay formulas for a single link.
//!
//! These are pure functions over plain scalars; any vanishing or negative
//! denominator that implies unbounded delay yields [`Delay::Infinite`]
//! instead of an error. No rounding is applied here; formatting belongs to
//! the reporting layer.

use serde::{Deserialize, Serialize};

use crate::delay::Delay;

/// Transmission delay: packet size over link bandwidth.
pub fn transmission_delay(packet_size_bits: f64, bandwidth_bps: f64) -> Delay {
    if bandwidth_bps <= 0.0 {
        return Delay::Infinite;
    }
    Delay::Finite(packet_size_bits / bandwidth_bps)
}

/// Propagation delay: distance over signal speed.
pub fn propagation_delay(distance_km: f64, speed_km_s: f64) -> Delay {
    if speed_km_s <= 0.0 {
        return Delay::Infinite;
    }
    Delay::Finite(distance_km / speed_km_s)
}

/// Congestion delay: queue length over spare service capacity.
///
/// A service rate at or below the arrival rate means the backlog never
/// drains (congestion collapse), reported as infinite delay.
pub fn congestion_delay(queue_length: f64, arrival_rate: f64, service_rate: f64) -> Delay {
    if service_rate <= arrival_rate {
        return Delay::Infinite;
    }
    Delay::Finite(queue_length / (service_rate - arrival_rate))
}

/// Breakdown of the per-packet delay components and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayReport {
    pub transmission: Delay,
    pub propagation: Delay,
    pub congestion: Delay,
    pub total: Delay,
}

/// Evaluate all three components for one link and sum them.
///
/// If any component saturates, the total is infinite as well.
pub fn total_network_delay(
    packet_size_bits: f64,
    bandwidth_bps: f64,
    distance_km: f64,
    speed_km_s: f64,
    queue_length: f64,
    arrival_rate: f64,
    service_rate: f64,
) -> DelayReport {
    let transmission = transmission_delay(packet_size_bits, bandwidth_bps);
    let propagation = propagation_delay(distance_km, speed_km_s);
    let congestion = congestion_delay(queue_length, arrival_rate, service_rate);

    let total = match (
        transmission.as_f64(),
        propagation.as_f64(),
        congestion.as_f64(),
    ) {
        (Some(t), Some(p), Some(c)) => Delay::Finite(t + p + c),
        _ => Delay::Infinite,
    };

    DelayReport {
        transmission,
        propagation,
        congestion,
        total,
    }
}
