use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use motionkit_core::spring::{catalog_with, css_block, css_custom_properties};
use motionkit_core::AppConfig;

pub fn run(config: &AppConfig, output: Option<&Path>) -> Result<()> {
    let css = if config.presets.custom.is_empty() {
        css_custom_properties().to_string()
    } else {
        css_block(&catalog_with(&config.presets.custom)?)
    };

    match output {
        Some(path) => {
            std::fs::write(path, &css)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} custom properties to {}", css.lines().count() - 2, path.display());
        }
        None => print!("{}", css),
    }

    Ok(())
}
