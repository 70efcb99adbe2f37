use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motionkit_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "motionkit")]
#[command(author, version, about = "Spring timing curves and scroll-linked parallax transforms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal preview
    Preview,
    /// Generate the timing curve for a spring
    Curve {
        /// Perceived duration in seconds
        #[arg(short, long, allow_hyphen_values = true)]
        duration: f64,
        /// 0 = no overshoot, 1 = maximal overshoot
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        bounce: f64,
        /// Print a JSON report instead of the descriptor
        #[arg(long)]
        json: bool,
    },
    /// List built-in and custom presets
    Presets {
        #[arg(long)]
        json: bool,
    },
    /// Print the custom-property block for all presets
    Css {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate the scroll-linked transform for one progress value
    Transform {
        /// Progress through the viewport, 0 to 1
        #[arg(short, long, allow_hyphen_values = true)]
        progress: f64,
        /// Override the configured distance
        #[arg(short, long, allow_hyphen_values = true)]
        distance: Option<f64>,
        #[arg(long)]
        no_scale: bool,
        #[arg(long)]
        no_opacity: bool,
        #[arg(long)]
        json: bool,
    },
    /// Feed a progress step through the smoothing spring, frame by frame
    Simulate {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        from: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        to: f64,
        /// Frames to run after the step (60 per second)
        #[arg(short, long, default_value_t = 60)]
        frames: usize,
        #[arg(long)]
        stiffness: Option<f64>,
        #[arg(long)]
        damping: Option<f64>,
    },
    /// Show or initialise the configuration file
    Config {
        /// Write the default configuration if none exists
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file (with --init)
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Overwrites the config file, so it must run even when that file is broken
    fn replaces_config(&self) -> bool {
        matches!(self, Commands::Config { init: true, .. })
    }
}

/// Configuration for `command`, or defaults plus the load error for commands
/// that replace the file
fn resolve_config(
    command: &Commands,
    loaded: motionkit_core::Result<AppConfig>,
) -> Result<(AppConfig, Option<motionkit_core::Error>)> {
    match loaded {
        Ok(config) => Ok((config, None)),
        Err(e) if command.replaces_config() => Ok((AppConfig::default(), Some(e))),
        Err(e) => Err(e.into()),
    }
}

fn init_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Preview);

    // Load configuration
    let (config, load_error) = resolve_config(&command, AppConfig::load())?;
    let config = Arc::new(config);

    // The preview owns the terminal, so it runs without a log writer
    if !matches!(command, Commands::Preview) {
        init_logging(&config);
    }
    if let Some(e) = load_error {
        warn!("Ignoring unreadable config: {}", e);
    }

    match command {
        Commands::Preview => commands::preview::run(config),
        Commands::Curve {
            duration,
            bounce,
            json,
        } => commands::curve::run(duration, bounce, json),
        Commands::Presets { json } => commands::presets::run(&config, json),
        Commands::Css { output } => commands::css::run(&config, output.as_deref()),
        Commands::Transform {
            progress,
            distance,
            no_scale,
            no_opacity,
            json,
        } => {
            let options = commands::transform::TransformOptions {
                progress,
                distance,
                no_scale,
                no_opacity,
                json,
            };
            commands::transform::run(&config, &options)
        }
        Commands::Simulate {
            from,
            to,
            frames,
            stiffness,
            damping,
        } => {
            let options = commands::simulate::SimulateOptions {
                from,
                to,
                frames,
                stiffness,
                damping,
            };
            commands::simulate::run(&config, &options)
        }
        Commands::Config { init, force } => commands::config::run(&config, init, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        let cli = Cli::try_parse_from(args).unwrap();
        cli.command.unwrap_or(Commands::Preview)
    }

    fn broken() -> motionkit_core::Result<AppConfig> {
        AppConfig::from_toml("[parallax\ndistance=")
    }

    #[test]
    fn test_init_runs_with_broken_config() {
        for args in [
            &["motionkit", "config", "--init"][..],
            &["motionkit", "config", "--init", "--force"][..],
        ] {
            let (config, error) = resolve_config(&command(args), broken()).unwrap();
            assert!(error.is_some());
            assert_eq!(config.parallax.distance, AppConfig::default().parallax.distance);
        }
    }

    #[test]
    fn test_other_commands_reject_broken_config() {
        for args in [
            &["motionkit"][..],
            &["motionkit", "config"][..],
            &["motionkit", "presets"][..],
            &["motionkit", "transform", "-p", "0.5"][..],
        ] {
            assert!(resolve_config(&command(args), broken()).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn test_loaded_config_passes_through() {
        let mut custom = AppConfig::default();
        custom.parallax.distance = 12.0;
        let (config, error) =
            resolve_config(&command(&["motionkit", "config", "--init"]), Ok(custom)).unwrap();
        assert!(error.is_none());
        assert_eq!(config.parallax.distance, 12.0);
    }
}
