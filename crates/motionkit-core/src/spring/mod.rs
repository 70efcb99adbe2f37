//! Spring timing curves
//!
//! Turns a perceived duration and a bounce factor into a timing curve
//! descriptor that a transition or animation property can use directly:
//!
//! ```text
//! 650ms linear(0, 0.0418, 0.1467, ..., 0.9987)
//! ```
//!
//! The curve is a sampled damped harmonic oscillator (see [`oscillator`]).
//! Generation is pure, so the named presets in [`presets`] are computed
//! once and shared.

pub mod curve;
pub mod oscillator;
pub mod presets;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use curve::{SpringCurve, TimingCurveDescriptor};
pub use oscillator::Oscillator;
pub use presets::{
    catalog_with, css_block, css_custom_properties, preset, presets, PresetCurve, SpringPreset,
};

/// Shortest perceived duration a curve is generated for, in seconds
pub const MIN_PERCEIVED_DURATION: f64 = 0.01;

/// Input of the curve generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParameters {
    /// Approximate time for the motion to visually settle
    pub perceived_duration_secs: f64,
    /// 0 = no overshoot, 1 = maximal overshoot
    pub bounce: f64,
}

impl SpringParameters {
    /// Build parameters, pulling out-of-range values into the usable domain
    pub fn new(perceived_duration_secs: f64, bounce: f64) -> Self {
        let duration = if perceived_duration_secs.is_finite() {
            perceived_duration_secs.max(MIN_PERCEIVED_DURATION)
        } else {
            MIN_PERCEIVED_DURATION
        };
        let clamped_bounce = if bounce.is_nan() {
            0.0
        } else {
            bounce.clamp(0.0, 1.0)
        };

        if duration != perceived_duration_secs || clamped_bounce != bounce {
            debug!(
                "Clamped spring parameters ({}, {}) to ({}, {})",
                perceived_duration_secs, bounce, duration, clamped_bounce
            );
        }

        Self {
            perceived_duration_secs: duration,
            bounce: clamped_bounce,
        }
    }
}

/// Generate the timing curve descriptor for a spring
pub fn generate(perceived_duration_secs: f64, bounce: f64) -> TimingCurveDescriptor {
    SpringCurve::from_parameters(SpringParameters::new(perceived_duration_secs, bounce))
        .descriptor()
}
