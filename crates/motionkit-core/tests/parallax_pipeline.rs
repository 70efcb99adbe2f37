use motionkit_core::parallax::visibility_progress;
use motionkit_core::{compute_transform, ParallaxTransform, ScrollTransformConfig, SmoothingConfig};

/// Scroll a 40-row viewport past an element at rows 100..120 and collect offsets
fn scroll_past(transform: &mut ParallaxTransform) -> Vec<f64> {
    (40..=140)
        .map(|viewport_top| {
            let progress = visibility_progress(100.0, 20.0, viewport_top as f64, 40.0);
            transform.evaluate(progress).offset
        })
        .collect()
}

#[test]
fn test_unsmoothed_pass_covers_full_range() {
    let config = ScrollTransformConfig {
        distance: 12.0,
        smoothing: SmoothingConfig::disabled(),
        ..ScrollTransformConfig::default()
    };
    let mut transform = ParallaxTransform::new(config.clone());
    let offsets = scroll_past(&mut transform);

    assert_eq!(offsets.first().copied(), Some(-12.0));
    assert_eq!(offsets.last().copied(), Some(12.0));
    assert!(offsets.windows(2).all(|w| w[1] >= w[0]));

    let centered = visibility_progress(100.0, 20.0, 90.0, 40.0);
    assert_eq!(compute_transform(centered, &config).offset, 0.0);
}

#[test]
fn test_smoothed_pass_trails_raw_offsets() {
    let config = ScrollTransformConfig {
        distance: 12.0,
        ..ScrollTransformConfig::default()
    };
    let mut smoothed = ParallaxTransform::new(config.clone());
    let offsets = scroll_past(&mut smoothed);

    // the element keeps climbing toward +distance but has not caught up
    let last = *offsets.last().unwrap();
    assert!(last < 12.0, "smoothed offset caught up instantly: {}", last);

    while !smoothed.is_settled() {
        smoothed.tick();
    }
    assert_eq!(smoothed.last().unwrap().offset, 12.0);
}

#[test]
fn test_each_element_owns_its_state() {
    let config = ScrollTransformConfig::default();
    let mut a = ParallaxTransform::new(config.clone());
    let mut b = ParallaxTransform::new(config);

    a.evaluate(0.0);
    a.evaluate(1.0);
    let fresh = b.evaluate(1.0);

    assert_eq!(fresh.offset, 100.0);
    assert!(a.last().unwrap().offset < 100.0);
    a.dispose();
    assert_eq!(b.evaluate(1.0).offset, 100.0);
}
