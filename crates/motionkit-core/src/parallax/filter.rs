//! Second-order spring filter
//!
//! Smooths a stream of raw values: each step pulls the filtered value toward
//! the latest raw value through a damped spring, so a sudden jump in the
//! input becomes a short settling motion. One filter belongs to one visual
//! element; dropping (or [`SpringFilter::dispose`]) releases its state.
//!
//! While the target holds still the spring equation has an exact solution,
//! so each step evaluates it in closed form instead of integrating. Any
//! stiffness, damping or step length stays finite and decays toward the
//! target.

use tracing::{debug, trace};

use crate::config::SmoothingConfig;

/// Displacement and speed below which the filter snaps to its target
pub const REST_THRESHOLD: f64 = 0.001;

/// Frame time assumed by [`SpringFilter::step`]
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Relative width of the discriminant band treated as critical damping
const CRITICAL_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct SpringFilter {
    stiffness: f64,
    damping: f64,
    mass: f64,
    /// None until the first sample arrives
    position: Option<f64>,
    velocity: f64,
    target: f64,
}

/// Finite and non-negative, otherwise `fallback`
fn physical(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        debug!("Spring {} {} is not usable, using {}", name, value, fallback);
        fallback
    }
}

/// Displacement and velocity after `t` seconds of `x'' = -b x - a x'`
fn evolve(x0: f64, v0: f64, a: f64, b: f64, t: f64) -> (f64, f64) {
    let disc = a * a - 4.0 * b;

    if disc.abs() <= CRITICAL_EPSILON * (a * a + 4.0 * b) {
        // Critically damped (also covers a = b = 0)
        let r = -0.5 * a;
        let c2 = v0 - r * x0;
        let decay = (r * t).exp();
        let x = (x0 + c2 * t) * decay;
        return (x, (c2 + r * (x0 + c2 * t)) * decay);
    }

    if disc > 0.0 {
        // Overdamped: two real roots, the fast one computed without cancellation
        let fast = -0.5 * (a + disc.sqrt());
        let slow = b / fast;
        let span = slow - fast;
        let c_slow = (v0 - fast * x0) / span;
        let c_fast = (slow * x0 - v0) / span;
        let (e_slow, e_fast) = ((slow * t).exp(), (fast * t).exp());
        return (
            c_slow * e_slow + c_fast * e_fast,
            c_slow * slow * e_slow + c_fast * fast * e_fast,
        );
    }

    // Underdamped
    let alpha = -0.5 * a;
    let wd = 0.5 * (-disc).sqrt();
    let c2 = (v0 - alpha * x0) / wd;
    let (sin, cos) = (wd * t).sin_cos();
    let envelope = (alpha * t).exp();
    (
        envelope * (x0 * cos + c2 * sin),
        envelope * (v0 * cos + (alpha * c2 - wd * x0) * sin),
    )
}

impl SpringFilter {
    pub fn new(config: SmoothingConfig) -> Self {
        let defaults = SmoothingConfig::default();
        let stiffness = physical("stiffness", config.stiffness, defaults.stiffness);
        let damping = physical("damping", config.damping, defaults.damping);
        let mass = if config.mass.is_finite() && config.mass > 0.0 {
            config.mass
        } else {
            defaults.mass
        };
        trace!(
            "Creating spring filter (stiffness {}, damping {}, mass {})",
            stiffness,
            damping,
            mass
        );

        Self {
            stiffness,
            damping,
            mass,
            position: None,
            velocity: 0.0,
            target: 0.0,
        }
    }

    /// Feed a raw value and advance one frame
    pub fn step(&mut self, raw: f64) -> f64 {
        self.step_by(raw, FRAME_DT)
    }

    /// Feed a raw value and advance `dt` seconds
    ///
    /// The first value seeds the filter and is returned unchanged.
    pub fn step_by(&mut self, raw: f64, dt: f64) -> f64 {
        self.target = raw;
        match self.position {
            None => {
                self.position = Some(raw);
                raw
            }
            Some(_) => self.advance(dt),
        }
    }

    /// Advance one frame toward the last raw value without new input
    pub fn tick(&mut self) -> Option<f64> {
        self.position?;
        Some(self.advance(FRAME_DT))
    }

    fn advance(&mut self, dt: f64) -> f64 {
        let Some(x) = self.position else {
            return self.target;
        };
        if !(dt.is_finite() && dt > 0.0) {
            return x;
        }

        let (offset, mut v) = evolve(
            x - self.target,
            self.velocity,
            self.damping / self.mass,
            self.stiffness / self.mass,
            dt,
        );
        let mut x = self.target + offset;

        // Constants large enough to overflow the solution land on the target
        let overflowed = !(x.is_finite() && v.is_finite());
        if overflowed {
            trace!("Spring filter overflowed, snapping to {}", self.target);
        }
        if overflowed || (offset.abs() < REST_THRESHOLD && v.abs() < REST_THRESHOLD) {
            x = self.target;
            v = 0.0;
        }

        self.position = Some(x);
        self.velocity = v;
        x
    }

    /// At rest on the target (trivially true before the first sample)
    pub fn is_settled(&self) -> bool {
        match self.position {
            None => true,
            Some(x) => x == self.target && self.velocity == 0.0,
        }
    }

    /// Release the filter together with its owning element
    pub fn dispose(self) {
        trace!("Disposing spring filter at {:?}", self.position);
    }
}
