use anyhow::Result;
use serde::Serialize;

use motionkit_core::spring::{catalog_with, presets};
use motionkit_core::AppConfig;

#[derive(Debug, Serialize)]
struct PresetReport<'a> {
    name: &'a str,
    duration: f64,
    bounce: f64,
    builtin: bool,
    settle_ms: u32,
    descriptor: &'a str,
}

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let catalog = catalog_with(&config.presets.custom)?;
    let is_builtin = |name: &str| {
        presets().iter().any(|p| p.name() == name)
            && !config.presets.custom.iter().any(|c| c.name == name)
    };

    if json {
        let reports: Vec<PresetReport> = catalog
            .iter()
            .map(|entry| PresetReport {
                name: entry.name(),
                duration: entry.preset.duration,
                bounce: entry.preset.bounce,
                builtin: is_builtin(entry.name()),
                settle_ms: entry.curve.duration_ms,
                descriptor: entry.descriptor.as_str(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Presets ({}):\n", catalog.len());

    for entry in &catalog {
        let origin = if is_builtin(entry.name()) { "" } else { " [custom]" };
        let overshoot = entry.curve.overshoot();
        let bounce = if overshoot > 0.0 {
            format!(", overshoot {:.1}%", overshoot * 100.0)
        } else {
            String::new()
        };

        println!(
            "  {:<10} {:.2}s bounce {:.2}{}",
            entry.name(),
            entry.preset.duration,
            entry.preset.bounce,
            origin
        );
        println!(
            "    Settles in {}ms over {} samples{}",
            entry.curve.duration_ms,
            entry.curve.samples.len(),
            bounce
        );
    }

    Ok(())
}
