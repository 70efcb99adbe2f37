//! Closed-form damped harmonic oscillator
//!
//! Unit mass moving from 0 toward a target of 1, released at rest. The
//! stiffness is derived from the perceived duration and the damping ratio
//! from the bounce, so callers never tune physical constants directly.

use std::f64::consts::PI;

use super::SpringParameters;

/// Position tolerance for the settle search
pub const REST_DELTA: f64 = 0.005;

/// Velocity tolerance (units per second) for the settle search
pub const REST_SPEED: f64 = 0.01;

/// Step of the settle search in milliseconds
const SETTLE_STEP_MS: u32 = 50;

/// Settle search always covers at least this long
const MIN_SETTLE_LIMIT_MS: u32 = 20_000;

/// Hard ceiling on the generated animation length
pub const MAX_SETTLE_MS: u32 = 600_000;

/// Phase `omega * t` by which the lightest damping has decayed below the
/// rest tolerances
const SETTLE_LIMIT_PHASE: f64 = 150.0;

/// Lowest damping ratio a bounce of 1 maps to
const MIN_DAMPING_RATIO: f64 = 0.05;

/// Damped oscillator with unit mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Undamped angular frequency (rad/s)
    omega: f64,
    /// Damping ratio in [MIN_DAMPING_RATIO, 1]
    zeta: f64,
}

impl Oscillator {
    /// Tune an oscillator so the motion reads as `perceived_duration_secs` long
    pub fn from_parameters(params: SpringParameters) -> Self {
        let omega = (2.0 * PI) / (params.perceived_duration_secs * 1.2);
        let zeta = (1.0 - params.bounce).clamp(MIN_DAMPING_RATIO, 1.0);
        Self { omega, zeta }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.zeta
    }

    fn is_critical(&self) -> bool {
        1.0 - self.zeta < 1e-6
    }

    /// Position at `t` seconds after release
    pub fn position(&self, t: f64) -> f64 {
        let w = self.omega;
        if self.is_critical() {
            return 1.0 - (-w * t).exp() * (1.0 + w * t);
        }

        let wd = w * (1.0 - self.zeta * self.zeta).sqrt();
        let envelope = (-self.zeta * w * t).exp();
        1.0 - envelope * ((wd * t).cos() + (self.zeta * w / wd) * (wd * t).sin())
    }

    /// Velocity at `t` seconds after release, in units per second
    pub fn velocity(&self, t: f64) -> f64 {
        let w = self.omega;
        if self.is_critical() {
            return w * w * t * (-w * t).exp();
        }

        let wd = w * (1.0 - self.zeta * self.zeta).sqrt();
        (w * w / wd) * (-self.zeta * w * t).exp() * (wd * t).sin()
    }

    /// Within the rest tolerances of the target at `t_ms`
    pub fn is_at_rest(&self, t_ms: u32) -> bool {
        let t = f64::from(t_ms) / 1000.0;
        (1.0 - self.position(t)).abs() <= REST_DELTA && self.velocity(t).abs() <= REST_SPEED
    }

    /// Longest time the settle search looks at, growing with the period
    fn settle_limit_ms(&self) -> u32 {
        let limit = (SETTLE_LIMIT_PHASE / self.omega * 1000.0).ceil();
        if limit >= f64::from(MAX_SETTLE_MS) {
            MAX_SETTLE_MS
        } else {
            (limit as u32).max(MIN_SETTLE_LIMIT_MS)
        }
    }

    /// First multiple of 50 ms at which the motion is at rest
    ///
    /// Gives up at the search limit and returns it; see [`Self::is_at_rest`].
    pub fn settle_time_ms(&self) -> u32 {
        let limit = self.settle_limit_ms();
        let mut t_ms = SETTLE_STEP_MS;
        while t_ms < limit {
            if self.is_at_rest(t_ms) {
                return t_ms;
            }
            t_ms += SETTLE_STEP_MS;
        }
        limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oscillator(duration: f64, bounce: f64) -> Oscillator {
        Oscillator::from_parameters(SpringParameters::new(duration, bounce))
    }

    #[test]
    fn test_starts_at_rest_at_origin() {
        for bounce in [0.0, 0.3, 1.0] {
            let osc = oscillator(0.5, bounce);
            assert!(osc.position(0.0).abs() < 1e-12);
            assert!(osc.velocity(0.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_critical_damping_never_overshoots() {
        let osc = oscillator(0.5, 0.0);
        let mut prev = 0.0;
        for i in 0..=400 {
            let x = osc.position(i as f64 / 200.0);
            assert!(x <= 1.0, "overshoot at step {}: {}", i, x);
            assert!(x >= prev - 1e-12, "not monotonic at step {}", i);
            prev = x;
        }
    }

    #[test]
    fn test_bouncy_spring_overshoots() {
        let osc = oscillator(0.5, 0.9);
        let peak = (0..200)
            .map(|i| osc.position(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "peak was {}", peak);
    }

    #[test]
    fn test_velocity_matches_position_slope() {
        let osc = oscillator(0.4, 0.5);
        let t = 0.13;
        let h = 1e-6;
        let slope = (osc.position(t + h) - osc.position(t - h)) / (2.0 * h);
        assert!((slope - osc.velocity(t)).abs() < 1e-4);
    }

    #[test]
    fn test_damping_ratio_bounds() {
        assert!((oscillator(0.5, 0.0).damping_ratio() - 1.0).abs() < 1e-12);
        assert!((oscillator(0.5, 1.0).damping_ratio() - MIN_DAMPING_RATIO).abs() < 1e-12);
    }

    #[test]
    fn test_settle_time_grows_with_duration() {
        let fast = oscillator(0.2, 0.1).settle_time_ms();
        let slow = oscillator(1.0, 0.1).settle_time_ms();
        assert!(fast < slow);
        assert!(slow <= MAX_SETTLE_MS);
        assert_eq!(fast % SETTLE_STEP_MS, 0);
    }

    #[test]
    fn test_slow_springs_get_a_longer_search() {
        for duration in [10.0, 20.0, 100.0] {
            let osc = oscillator(duration, 0.0);
            let settle = osc.settle_time_ms();
            assert!(settle > MIN_SETTLE_LIMIT_MS || duration < 20.0);
            assert!(osc.is_at_rest(settle), "{}s spring not at rest at {}ms", duration, settle);
        }
    }

    #[test]
    fn test_settle_search_has_a_ceiling() {
        let osc = oscillator(1_000_000.0, 0.0);
        assert_eq!(osc.settle_time_ms(), MAX_SETTLE_MS);
        assert!(!osc.is_at_rest(MAX_SETTLE_MS));
    }
}
