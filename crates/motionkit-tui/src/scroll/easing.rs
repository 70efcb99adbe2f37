//! L4 Atomic Layer: Easing curves for page scrolling
//!
//! Maps animation progress [0, 1] to scroll progress. Besides the fixed
//! curves from the config, a generated spring curve can drive the scroll so
//! the preview shows a preset acting on real motion.

use motionkit_core::{EasingType, SpringCurve};

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => power_ease_out(t, 3),
            EasingType::Quintic => power_ease_out(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// 1 - (1-t)^n
#[inline]
fn power_ease_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// 1 - 2^(-10t), pinned to 1 at the end
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Easing used by a running scroll animation
#[derive(Debug, Clone, PartialEq)]
pub enum Easing {
    Builtin(EasingType),
    /// Sampled spring; may overshoot before landing
    Spring(SpringCurve),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Builtin(easing) => easing.apply(t),
            Easing::Spring(_) if t >= 1.0 => 1.0,
            Easing::Spring(curve) => curve.value_at(t.max(0.0)),
        }
    }
}

impl From<EasingType> for Easing {
    fn from(easing: EasingType) -> Self {
        Easing::Builtin(easing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILTIN: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in BUILTIN {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in BUILTIN.into_iter().skip(1) {
            let mut prev = 0.0;
            for i in 0..=10 {
                let v = easing.apply(i as f64 / 10.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_spring_easing_lands_exactly() {
        let curve: SpringCurve = "200ms linear(0, 0.7, 1.1, 0.998)".parse().unwrap();
        let easing = Easing::Spring(curve);
        assert_eq!(easing.apply(0.0), 0.0);
        assert!(easing.apply(0.66) > 1.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}
