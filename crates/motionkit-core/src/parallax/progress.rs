//! Visibility progress of an element moving through a viewport
//!
//! 0 when the element's top edge sits on the viewport's bottom edge (just
//! entering), 1 when its bottom edge sits on the viewport's top edge (just
//! left). Positions share one axis that grows downward.

/// Progress of an element through the viewport, clamped to [0, 1]
pub fn visibility_progress(
    element_top: f64,
    element_height: f64,
    viewport_top: f64,
    viewport_height: f64,
) -> f64 {
    let span = viewport_height + element_height;
    if !(span > 0.0) {
        return 0.0;
    }

    let travelled = viewport_top + viewport_height - element_top;
    let progress = travelled / span;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entering_and_leaving() {
        // element at 100..120, viewport 40 tall
        assert_eq!(visibility_progress(100.0, 20.0, 60.0, 40.0), 0.0);
        assert_eq!(visibility_progress(100.0, 20.0, 120.0, 40.0), 1.0);
    }

    #[test]
    fn test_centered_is_half() {
        // element center 110, viewport center 110
        assert!((visibility_progress(100.0, 20.0, 90.0, 40.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_outside_is_clamped() {
        assert_eq!(visibility_progress(100.0, 20.0, 0.0, 40.0), 0.0);
        assert_eq!(visibility_progress(100.0, 20.0, 500.0, 40.0), 1.0);
    }

    #[test]
    fn test_degenerate_span() {
        assert_eq!(visibility_progress(10.0, 0.0, 0.0, 0.0), 0.0);
    }
}
