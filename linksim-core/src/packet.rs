//! Packet timestamps and per-packet delay accounting.

use serde::{Deserialize, Serialize};

/// A unit of work flowing through the simulated link.
///
/// A packet carries three timestamps, all in seconds of simulation time: its
/// arrival, the moment it entered service, and the moment service completed.
/// The latter two start unset and are each written exactly once by the
/// simulation loop; once all three are set the packet is immutable and
/// satisfies `arrival_time <= start_service <= departure_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Simulation time at which the packet arrived.
    pub arrival_time: f64,
    /// Simulation time at which the packet entered service, if it has.
    pub start_service: Option<f64>,
    /// Simulation time at which service completed, if it has.
    pub departure_time: Option<f64>,
}

impl Packet {
    /// Create a packet arriving at `arrival_time`.
    pub fn new(arrival_time: f64) -> Self {
        Self {
            arrival_time,
            start_service: None,
            departure_time: None,
        }
    }

    /// Record the start of service.
    pub(crate) fn enter_service(&mut self, now: f64) {
        debug_assert!(self.start_service.is_none(), "service started twice");
        debug_assert!(now >= self.arrival_time);
        self.start_service = Some(now);
    }

    /// Record service completion.
    pub(crate) fn complete(&mut self, now: f64) {
        debug_assert!(self.departure_time.is_none(), "departure recorded twice");
        debug_assert!(self.start_service.is_some_and(|s| now >= s));
        self.departure_time = Some(now);
    }

    /// Total time the packet spent in the system (departure minus arrival).
    ///
    /// Returns `None` until the packet has departed.
    pub fn total_delay(&self) -> Option<f64> {
        self.departure_time.map(|d| d - self.arrival_time)
    }

    /// Time the packet spent waiting before service began.
    ///
    /// A packet that entered service the instant it arrived reports zero.
    pub fn queueing_delay(&self) -> f64 {
        self.start_service
            .map_or(0.0, |start| start - self.arrival_time)
    }

    /// Whether the packet has completed service.
    pub fn is_completed(&self) -> bool {
        self.departure_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_lifecycle() {
        let mut packet = Packet::new(1.0);
        assert!(!packet.is_completed());
        assert_eq!(packet.total_delay(), None);
        assert_eq!(packet.queueing_delay(), 0.0);

        packet.enter_service(1.5);
        packet.complete(2.25);

        assert!(packet.is_completed());
        assert_eq!(packet.total_delay(), Some(1.25));
        assert_eq!(packet.queueing_delay(), 0.5);
    }

    #[test]
    fn test_immediate_service_has_zero_queueing_delay() {
        let mut packet = Packet::new(3.0);
        packet.enter_service(3.0);
        packet.complete(3.1);

        assert_eq!(packet.queueing_delay(), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "service started twice")]
    fn test_double_service_start_is_rejected() {
        let mut packet = Packet::new(0.0);
        packet.enter_service(0.0);
        packet.enter_service(1.0);
    }
}
