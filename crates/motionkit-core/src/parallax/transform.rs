use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::filter::{SpringFilter, FRAME_DT};
use crate::config::ScrollTransformConfig;
use crate::keyframes::Keyframes;

/// Visual state of a scroll-linked element for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformOutput {
    /// Offset along the scroll axis
    pub offset: f64,
    pub scale: f64,
    pub opacity: f64,
}

fn scale_curve() -> &'static Keyframes {
    static CURVE: OnceLock<Keyframes> = OnceLock::new();
    CURVE.get_or_init(|| Keyframes::new([(0.0, 0.95), (0.3, 1.0), (0.7, 1.0), (1.0, 0.95)]))
}

fn opacity_curve() -> &'static Keyframes {
    static CURVE: OnceLock<Keyframes> = OnceLock::new();
    CURVE.get_or_init(|| Keyframes::new([(0.0, 0.6), (0.2, 1.0), (0.8, 1.0), (1.0, 0.6)]))
}

/// Linear map of progress from [0, 1] onto [-distance, distance]
pub fn offset_at(progress: f64, distance: f64) -> f64 {
    -distance + 2.0 * distance * progress
}

pub fn scale_at(progress: f64, enabled: bool) -> f64 {
    if enabled {
        scale_curve().sample(progress)
    } else {
        1.0
    }
}

pub fn opacity_at(progress: f64, enabled: bool) -> f64 {
    if enabled {
        opacity_curve().sample(progress)
    } else {
        1.0
    }
}

/// Unsmoothed transform for a progress value
///
/// Smoothing settings in `config` are ignored here; use
/// [`ParallaxTransform`] when the offset should be spring-filtered.
pub fn compute_transform(progress: f64, config: &ScrollTransformConfig) -> TransformOutput {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    TransformOutput {
        offset: offset_at(progress, config.distance),
        scale: scale_at(progress, config.enable_scale),
        opacity: opacity_at(progress, config.enable_opacity),
    }
}

/// Scroll-linked transform owned by a single visual element
///
/// Holds the element's spring filter when smoothing is enabled, so the
/// offset depends on recent progress history as well as the current sample.
#[derive(Debug, Clone)]
pub struct ParallaxTransform {
    config: ScrollTransformConfig,
    filter: Option<SpringFilter>,
    last: Option<TransformOutput>,
}

impl ParallaxTransform {
    pub fn new(config: ScrollTransformConfig) -> Self {
        let filter = config
            .smoothing
            .enabled
            .then(|| SpringFilter::new(config.smoothing));
        Self {
            config,
            filter,
            last: None,
        }
    }

    pub fn is_smoothed(&self) -> bool {
        self.filter.is_some()
    }

    /// Evaluate for a new progress sample, one frame after the previous one
    pub fn evaluate(&mut self, progress: f64) -> TransformOutput {
        self.evaluate_by(progress, FRAME_DT)
    }

    /// Evaluate for a new progress sample taken `dt` seconds after the previous one
    pub fn evaluate_by(&mut self, progress: f64, dt: f64) -> TransformOutput {
        let mut output = compute_transform(progress, &self.config);
        if let Some(filter) = self.filter.as_mut() {
            output.offset = filter.step_by(output.offset, dt);
        }
        self.last = Some(output);
        output
    }

    /// Advance smoothing one frame without a new sample
    pub fn tick(&mut self) -> Option<TransformOutput> {
        let offset = self.filter.as_mut()?.tick()?;
        let last = self.last.as_mut()?;
        last.offset = offset;
        Some(*last)
    }

    /// Most recent output
    pub fn last(&self) -> Option<TransformOutput> {
        self.last
    }

    /// No smoothing motion left (always true without smoothing)
    pub fn is_settled(&self) -> bool {
        self.filter.as_ref().map_or(true, SpringFilter::is_settled)
    }

    /// Release the element's smoothing state
    pub fn dispose(self) {
        trace!("Disposing parallax transform");
        if let Some(filter) = self.filter {
            filter.dispose();
        }
    }
}
