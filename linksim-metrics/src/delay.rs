//! Tagged mean-delay values.
//!
//! Results that cross a reporting boundary use [`Delay`] instead of bare IEEE
//! sentinels, so that comparisons and serialization stay well-defined: an
//! unstable queue reports `Infinite`, a run that completed no packets reports
//! `Undefined`, and everything else is `Finite` seconds.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// A mean-delay result in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delay {
    /// A finite delay, in seconds.
    Finite(f64),
    /// Saturation: the queue is unstable (or a denominator vanished) and the
    /// delay grows without bound.
    Infinite,
    /// No samples were available to compute a mean.
    Undefined,
}

impl Delay {
    /// Whether this is a finite value.
    pub fn is_finite(&self) -> bool {
        matches!(self, Delay::Finite(_))
    }

    /// The finite value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Delay::Finite(value) => Some(*value),
            _ => None,
        }
    }

    /// Build from a raw float, mapping IEEE sentinels back to tags.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Delay::Undefined
        } else if value.is_infinite() {
            Delay::Infinite
        } else {
            Delay::Finite(value)
        }
    }
}

impl PartialOrd for Delay {
    /// `Infinite` is greater than every `Finite` value; `Undefined` only
    /// compares equal to itself and never orders against anything else.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Delay::Undefined, Delay::Undefined) => Some(Ordering::Equal),
            (Delay::Undefined, _) | (_, Delay::Undefined) => None,
            (Delay::Infinite, Delay::Infinite) => Some(Ordering::Equal),
            (Delay::Infinite, Delay::Finite(_)) => Some(Ordering::Greater),
            (Delay::Finite(_), Delay::Infinite) => Some(Ordering::Less),
            (Delay::Finite(a), Delay::Finite(b)) => a.partial_cmp(b),
        }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delay::Finite(value) => write!(f, "{value}"),
            Delay::Infinite => write!(f, "inf"),
            Delay::Undefined => write!(f, "undefined"),
        }
    }
}

impl FromStr for Delay {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inf" => Ok(Delay::Infinite),
            "undefined" => Ok(Delay::Undefined),
            other => other
                .parse::<f64>()
                .map(Delay::Finite)
                .map_err(|_| MetricsError::ParseError(format!("invalid delay value: {s:?}"))),
        }
    }
}
