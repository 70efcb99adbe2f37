use motionkit_core::spring::{catalog_with, css_block, css_custom_properties, preset, presets, SpringPreset};
use motionkit_core::{generate, AppConfig, SpringCurve};

#[test]
fn test_css_block_lists_every_builtin_preset() {
    let css = css_custom_properties();
    for entry in presets() {
        let line = format!("  --{}: {};", entry.name(), entry.descriptor);
        assert!(css.contains(&line), "missing {}", entry.name());
    }
}

#[test]
fn test_css_block_is_stable_across_calls() {
    let first = css_custom_properties();
    let second = css_custom_properties();
    assert!(std::ptr::eq(first, second));
    assert_eq!(css_block(presets()), first);
}

#[test]
fn test_descriptors_parse_back_into_curves() {
    for entry in presets() {
        let curve: SpringCurve = entry.descriptor.as_str().parse().unwrap();
        assert_eq!(curve.duration_ms, entry.curve.duration_ms);
        assert_eq!(curve.samples.len(), entry.curve.samples.len());
    }
}

#[test]
fn test_bounce_orders_overshoot() {
    let none = generate(0.5, 0.0).parse().unwrap().overshoot();
    let some = generate(0.5, 0.3).parse().unwrap().overshoot();
    let lots = generate(0.5, 0.9).parse().unwrap().overshoot();
    assert_eq!(none, 0.0);
    assert!(some > none);
    assert!(lots > some);
}

#[test]
fn test_config_presets_extend_css() {
    let config = AppConfig::from_toml(
        r#"
        [[presets.custom]]
        name = "sheet"
        duration = 0.4
        bounce = 0.25
        "#,
    )
    .unwrap();

    let catalog = catalog_with(&config.presets.custom).unwrap();
    let css = css_block(&catalog);
    let sheet = SpringPreset::new("sheet", 0.4, 0.25).compile();
    assert!(css.contains(&format!("  --sheet: {};", sheet.descriptor)));
    assert!(css.contains(&format!("  --bouncy: {};", preset("bouncy").unwrap().descriptor)));
}
