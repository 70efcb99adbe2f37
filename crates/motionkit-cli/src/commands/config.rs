use anyhow::{Context, Result};

use motionkit_core::AppConfig;

pub fn run(config: &AppConfig, init: bool, force: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() && !force {
            println!("Config already exists at {}", path.display());
            println!("Use --force to overwrite it with defaults.");
            return Ok(());
        }
        AppConfig::default().save()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{}", content);

    Ok(())
}
