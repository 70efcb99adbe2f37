//! L3 Molecular Layer: Page scroll animation controller
//!
//! Combines easing and timing to move the preview page. Positions are kept
//! in fractional rows so the parallax progress of every card changes
//! smoothly between terminal rows.

use std::time::{Duration, Instant};

use motionkit_core::ScrollConfig;

use super::easing::Easing;
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
}

/// Scroll animation controller
///
/// `scroll_by` batches deltas until the next `update`, which starts (or
/// retargets) the animation and returns the interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    easing: Easing,
    position: f64,
    max_scroll: f64,
    pending_delta: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            easing: config.easing.into(),
            config,
            position: 0.0,
            max_scroll: 0.0,
            pending_delta: 0.0,
        }
    }

    /// Easing for animations started from now on
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    /// Largest reachable position; the current position is pulled inside
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.position = self.clamp(self.position);
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animation running or deltas waiting; the caller should tick fast
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.is_animating() || self.pending_delta != 0.0
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Final position once the running animation ends
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.position)
    }

    /// Jump without animating
    pub fn set_position(&mut self, position: f64) {
        self.animation = None;
        self.pending_delta = 0.0;
        self.position = self.clamp(position);
    }

    fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.max_scroll)
    }

    fn duration(&self) -> Duration {
        match &self.easing {
            Easing::Spring(curve) => Duration::from_millis(u64::from(curve.duration_ms)),
            Easing::Builtin(_) => self.config.animation_duration(),
        }
    }

    fn start(&mut self, target: f64, now: Instant) {
        let target = self.clamp(target);
        if !self.config.is_smooth() {
            self.set_position(target);
            return;
        }
        if target == self.position {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.position,
            to: target,
            duration: self.duration(),
            easing: self.easing.clone(),
        });
    }

    /// Animate to an absolute position
    pub fn scroll_to(&mut self, target: f64, now: Instant) {
        self.pending_delta = 0.0;
        self.start(target, now);
    }

    /// Queue a relative scroll (positive = down)
    pub fn scroll_by(&mut self, delta: f64) {
        if self.config.is_smooth() {
            self.pending_delta += delta;
        } else {
            let target = self.position + delta;
            self.set_position(target);
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(f64::from(self.config.scroll_lines.max(1)));
    }

    pub fn scroll_up(&mut self) {
        self.scroll_by(-f64::from(self.config.scroll_lines.max(1)));
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16) {
        self.scroll_by(f64::from((viewport_height / 2).max(1)));
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16) {
        self.scroll_by(-f64::from((viewport_height / 2).max(1)));
    }

    /// Advance to `now` and return the current position
    pub fn update(&mut self, now: Instant) -> f64 {
        if self.pending_delta != 0.0 {
            let target = self.target() + self.pending_delta;
            self.pending_delta = 0.0;
            self.start(target, now);
        }

        if let Some(anim) = &self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.position = self.clamp(anim.to);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, now, anim.duration));
                self.position = self.clamp(lerp(anim.from, anim.to, t));
            }
        }

        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionkit_core::{EasingType, SpringCurve};

    fn animator(smooth: bool) -> ScrollAnimator {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: smooth,
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..ScrollConfig::default()
        });
        animator.set_max_scroll(200.0);
        animator
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = animator(false);
        animator.scroll_by(30.0);
        assert_eq!(animator.position(), 30.0);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_batched_deltas_start_one_animation() {
        let mut animator = animator(true);
        let now = Instant::now();
        animator.scroll_by(10.0);
        animator.scroll_by(10.0);
        animator.scroll_by(10.0);
        assert!(animator.needs_update());

        assert_eq!(animator.update(now), 0.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 30.0);

        let mid = animator.update(now + Duration::from_millis(50));
        assert!((mid - 15.0).abs() < 1e-9);

        assert_eq!(animator.update(now + Duration::from_millis(100)), 30.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_target_is_clamped() {
        let mut animator = animator(true);
        let now = Instant::now();
        animator.scroll_to(500.0, now);
        assert_eq!(animator.target(), 200.0);
        animator.scroll_to(-5.0, now);
        assert!(!animator.is_animating());
        assert_eq!(animator.position(), 0.0);
    }

    #[test]
    fn test_retarget_during_animation() {
        let mut animator = animator(true);
        let now = Instant::now();
        animator.scroll_by(20.0);
        animator.update(now);
        animator.update(now + Duration::from_millis(50));
        animator.scroll_by(20.0);
        animator.update(now + Duration::from_millis(50));
        assert_eq!(animator.target(), 40.0);
    }

    #[test]
    fn test_spring_easing_uses_curve_duration() {
        let mut animator = animator(true);
        let curve: SpringCurve = "400ms linear(0, 1.2, 1)".parse().unwrap();
        animator.set_easing(Easing::Spring(curve));

        let now = Instant::now();
        animator.scroll_to(100.0, now);
        // overshoot past the target mid-way
        assert!(animator.update(now + Duration::from_millis(200)) > 100.0);
        assert!(animator.is_animating());
        assert_eq!(animator.update(now + Duration::from_millis(400)), 100.0);
    }

    #[test]
    fn test_shrinking_page_pulls_position_in() {
        let mut animator = animator(false);
        animator.set_position(150.0);
        animator.set_max_scroll(80.0);
        assert_eq!(animator.position(), 80.0);
    }
}
