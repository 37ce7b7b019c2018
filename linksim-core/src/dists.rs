//! Distribution traits and implementations for arrival patterns and service
//! times.
//!
//! All samples are plain `f64` seconds, matching the simulator's event clock.
//! Every stochastic distribution owns an explicitly seeded generator so that
//! runs are reproducible and independent.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Trait for generating arrival patterns.
///
/// An arrival pattern produces the gap, in seconds, until the next packet
/// arrival.
pub trait ArrivalPattern: Send {
    /// Get the time until the next arrival, in seconds.
    fn next_interarrival(&mut self) -> f64;
}

/// Trait for sampling service times from a distribution.
///
/// Callers must only ever pass distributions with non-negative support.
pub trait ServiceTimeDistribution: Send {
    /// Sample one service duration, in seconds.
    fn sample(&mut self) -> f64;
}

// =============================================================================
// Arrival Pattern Implementations
// =============================================================================

/// Constant arrival pattern with a fixed inter-arrival gap.
#[derive(Debug, Clone)]
pub struct ConstantArrivalPattern {
    interval: f64,
}

impl ConstantArrivalPattern {
    /// Create a new constant arrival pattern.
    ///
    /// # Panics
    ///
    /// Panics if the interval is not positive and finite.
    pub fn new(interval: f64) -> Self {
        assert!(
            interval.is_finite() && interval > 0.0,
            "Interval must be positive"
        );
        Self { interval }
    }
}

impl ArrivalPattern for ConstantArrivalPattern {
    fn next_interarrival(&mut self) -> f64 {
        self.interval
    }
}

/// Poisson arrival pattern.
///
/// Generates arrivals according to a Poisson process with exponentially
/// distributed inter-arrival times.
pub struct PoissonArrivals {
    /// Rate parameter (lambda), arrivals per second.
    rate: f64,
    rng: ChaCha8Rng,
    exp_dist: rand_distr::Exp<f64>,
}

impl PoissonArrivals {
    /// Create a new Poisson arrival pattern with its own seeded stream.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive.
    pub fn new(rate: f64, seed: u64) -> Self {
        assert!(rate > 0.0, "Rate must be positive");

        let exp_dist = rand_distr::Exp::new(rate).expect("Rate must be positive");

        Self {
            rate,
            rng: ChaCha8Rng::seed_from_u64(seed),
            exp_dist,
        }
    }

    /// Get the rate parameter.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ArrivalPattern for PoissonArrivals {
    fn next_interarrival(&mut self) -> f64 {
        self.rng.sample(self.exp_dist)
    }
}

// =============================================================================
// Service Time Distribution Implementations
// =============================================================================

/// Constant service time distribution (the D in M/D/1).
#[derive(Debug, Clone)]
pub struct ConstantServiceTime {
    duration: f64,
}

impl ConstantServiceTime {
    /// Create a new constant service time distribution.
    ///
    /// # Panics
    ///
    /// Panics if the duration is not positive and finite.
    pub fn new(duration: f64) -> Self {
        assert!(
            duration.is_finite() && duration > 0.0,
            "Service duration must be positive"
        );
        Self { duration }
    }
}

impl ServiceTimeDistribution for ConstantServiceTime {
    fn sample(&mut self) -> f64 {
        self.duration
    }
}

/// Exponential service time distribution (the second M in M/M/1).
pub struct ExponentialServiceTime {
    /// Rate parameter (mu), services per second.
    rate: f64,
    rng: ChaCha8Rng,
    exp_dist: rand_distr::Exp<f64>,
}

impl ExponentialServiceTime {
    /// Create a new exponential service time distribution with its own
    /// seeded stream.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive.
    pub fn new(rate: f64, seed: u64) -> Self {
        assert!(rate > 0.0, "Rate must be positive");

        let exp_dist = rand_distr::Exp::new(rate).expect("Rate must be positive");

        Self {
            rate,
            rng: ChaCha8Rng::seed_from_u64(seed),
            exp_dist,
        }
    }

    /// Get the rate parameter.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Get the mean service time (1/rate), in seconds.
    pub fn mean_service_time(&self) -> f64 {
        1.0 / self.rate
    }
}

impl ServiceTimeDistribution for ExponentialServiceTime {
    fn sample(&mut self) -> f64 {
        self.rng.sample(self.exp_dist)
    }
}

/// Uniform service time distribution over `[min, max]` seconds.
pub struct UniformServiceTime {
    min: f64,
    max: f64,
    rng: ChaCha8Rng,
    uniform_dist: rand_distr::Uniform<f64>,
}

impl UniformServiceTime {
    /// Create a new uniform service time distribution with its own seeded
    /// stream.
    ///
    /// # Panics
    ///
    /// Panics if `min` is negative or not below `max`.
    pub fn new(min: f64, max: f64, seed: u64) -> Self {
        assert!(
            min >= 0.0 && min < max,
            "Minimum duration must be non-negative and less than maximum"
        );

        Self {
            min,
            max,
            rng: ChaCha8Rng::seed_from_u64(seed),
            uniform_dist: rand_distr::Uniform::new(min, max),
        }
    }

    /// Get the minimum service time.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum service time.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the mean service time.
    pub fn mean_service_time(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl ServiceTimeDistribution for UniformServiceTime {
    fn sample(&mut self) -> f64 {
        self.rng.sample(self.uniform_dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_arrival_pattern() {
        let mut pattern = ConstantArrivalPattern::new(0.1);
        assert_eq!(pattern.next_interarrival(), 0.1);
        assert_eq!(pattern.next_interarrival(), 0.1);
    }

    #[test]
    fn test_poisson_arrivals_creation() {
        let pattern = PoissonArrivals::new(1.0, 7);
        assert_eq!(pattern.rate(), 1.0);
    }

    #[test]
    #[should_panic(expected = "Rate must be positive")]
    fn test_poisson_arrivals_invalid_rate() {
        PoissonArrivals::new(0.0, 7);
    }

    #[test]
    fn test_poisson_arrivals_generates_positive_times() {
        let mut pattern = PoissonArrivals::new(10.0, 7);

        for _ in 0..10 {
            let gap = pattern.next_interarrival();
            assert!(gap > 0.0, "Inter-arrival time should be positive");
        }
    }

    #[test]
    fn test_poisson_arrivals_is_reproducible() {
        let mut a = PoissonArrivals::new(5.0, 99);
        let mut b = PoissonArrivals::new(5.0, 99);

        for _ in 0..20 {
            assert_eq!(a.next_interarrival(), b.next_interarrival());
        }
    }

    #[test]
    fn test_constant_service_time() {
        let mut dist = ConstantServiceTime::new(0.05);
        assert_eq!(dist.sample(), 0.05);
        assert_eq!(dist.sample(), 0.05);
    }

    #[test]
    #[should_panic(expected = "Service duration must be positive")]
    fn test_constant_service_time_invalid_duration() {
        ConstantServiceTime::new(0.0);
    }

    #[test]
    fn test_exponential_service_time_creation() {
        let dist = ExponentialServiceTime::new(2.0, 7);
        assert_eq!(dist.rate(), 2.0);
        assert_eq!(dist.mean_service_time(), 0.5);
    }

    #[test]
    #[should_panic(expected = "Rate must be positive")]
    fn test_exponential_service_time_invalid_rate() {
        ExponentialServiceTime::new(0.0, 7);
    }

    #[test]
    fn test_exponential_service_time_sampling() {
        let mut dist = ExponentialServiceTime::new(10.0, 7);

        for _ in 0..10 {
            let time = dist.sample();
            assert!(time > 0.0, "Service time should be positive");
        }
    }

    #[test]
    fn test_exponential_sample_mean_tracks_rate() {
        let mut dist = ExponentialServiceTime::new(100.0, 7);

        let n = 20_000;
        let total: f64 = (0..n).map(|_| dist.sample()).sum();
        let mean = total / n as f64;

        // Mean should be 0.01; allow generous slack for sampling noise.
        assert!((mean - 0.01).abs() < 0.001, "sample mean was {mean}");
    }

    #[test]
    fn test_uniform_service_time_creation() {
        let dist = UniformServiceTime::new(0.05, 0.15, 7);
        assert_eq!(dist.min(), 0.05);
        assert_eq!(dist.max(), 0.15);
        assert_eq!(dist.mean_service_time(), 0.1);
    }

    #[test]
    #[should_panic(expected = "Minimum duration must be non-negative and less than maximum")]
    fn test_uniform_service_time_invalid_range() {
        UniformServiceTime::new(0.15, 0.05, 7);
    }

    #[test]
    fn test_uniform_service_time_sampling() {
        let mut dist = UniformServiceTime::new(0.05, 0.15, 7);

        for _ in 0..20 {
            let time = dist.sample();
            assert!(time >= 0.05, "Service time should be >= minimum");
            assert!(time <= 0.15, "Service time should be <= maximum");
        }
    }
}
