//! Sample statistics over delay sequences.

use crate::delay::Delay;

/// Mean of a sample, or `Undefined` when the sample is empty.
pub fn mean_delay(samples: &[f64]) -> Delay {
    if samples.is_empty() {
        Delay::Undefined
    } else {
        Delay::from_f64(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Mean queueing delay.
///
/// A run that completed no packets observed no waiting at all, so the empty
/// case reports zero rather than undefined.
pub fn mean_queueing_delay(samples: &[f64]) -> Delay {
    if samples.is_empty() {
        Delay::Finite(0.0)
    } else {
        mean_delay(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_delay() {
        assert_eq!(mean_delay(&[1.0, 2.0, 3.0]), Delay::Finite(2.0));
        assert_eq!(mean_delay(&[]), Delay::Undefined);
    }

    #[test]
    fn test_mean_queueing_delay_empty_is_zero() {
        assert_eq!(mean_queueing_delay(&[]), Delay::Finite(0.0));
        assert_eq!(mean_queueing_delay(&[0.5, 1.5]), Delay::Finite(1.0));
    }
}
