use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::oscillator::Oscillator;
use super::SpringParameters;
use crate::{Error, Result};

/// Milliseconds of animation per sample point
const SAMPLE_RESOLUTION_MS: f64 = 30.0;

/// Samples are rounded to this many steps per unit (4 decimal places)
const SAMPLE_PRECISION: f64 = 10_000.0;

/// Sampled spring motion over its settle duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringCurve {
    /// Length of the transition in milliseconds
    pub duration_ms: u32,
    /// Progress values at evenly spaced times over `duration_ms`
    pub samples: Vec<f64>,
}

impl SpringCurve {
    pub fn from_parameters(params: SpringParameters) -> Self {
        let oscillator = Oscillator::from_parameters(params);
        let duration_ms = oscillator.settle_time_ms();
        let count = ((f64::from(duration_ms) / SAMPLE_RESOLUTION_MS).round() as usize).max(2);
        let duration_secs = f64::from(duration_ms) / 1000.0;

        let mut samples: Vec<f64> = (0..count)
            .map(|i| {
                let t = duration_secs * i as f64 / (count - 1) as f64;
                (oscillator.position(t) * SAMPLE_PRECISION).round() / SAMPLE_PRECISION
            })
            .collect();

        if !oscillator.is_at_rest(duration_ms) {
            debug!(
                "Spring ({}s, bounce {}) still moving after {}ms, ending the curve at 1",
                params.perceived_duration_secs, params.bounce, duration_ms
            );
            if let Some(last) = samples.last_mut() {
                *last = 1.0;
            }
        }

        Self {
            duration_ms,
            samples,
        }
    }

    /// Serialized form for a transition or animation property
    pub fn descriptor(&self) -> TimingCurveDescriptor {
        TimingCurveDescriptor(self.to_string())
    }

    /// Largest distance the curve travels past its endpoint (0 if it never does)
    pub fn overshoot(&self) -> f64 {
        self.samples
            .iter()
            .fold(0.0_f64, |acc, &v| acc.max(v - 1.0))
    }

    /// Progress at normalized time `t` in [0, 1], linear between samples
    pub fn value_at(&self, t: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        if t.is_nan() || t <= 0.0 {
            return first;
        }
        if t >= 1.0 {
            return last;
        }

        let pos = t * (self.samples.len() - 1) as f64;
        let i = (pos.floor() as usize).min(self.samples.len() - 2);
        let (a, b) = (self.samples[i], self.samples[i + 1]);
        a + (b - a) * (pos - i as f64)
    }
}

impl fmt::Display for SpringCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms linear(", self.duration_ms)?;
        for (i, sample) in self.samples.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", sample)?;
        }
        write!(f, ")")
    }
}

impl FromStr for SpringCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedDescriptor(s.to_string());

        let (duration, easing) = s.trim().split_once("ms ").ok_or_else(malformed)?;
        let duration_ms = duration.trim().parse::<u32>().map_err(|_| malformed())?;

        let body = easing
            .trim()
            .strip_prefix("linear(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let samples = body
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        if samples.len() < 2 {
            return Err(malformed());
        }

        Ok(Self {
            duration_ms,
            samples,
        })
    }
}

/// Text form of a spring curve, e.g. `650ms linear(0, 0.04, ..., 1)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimingCurveDescriptor(String);

impl TimingCurveDescriptor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the structured curve
    pub fn parse(&self) -> Result<SpringCurve> {
        self.0.parse()
    }
}

impl fmt::Display for TimingCurveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
