//! Command line interface for the descriptor generator.
//!
//! Loads settings from a configuration file, runs the generator, and writes
//! the resulting document to a file or stdout.

mod args;

pub use args::Args;

use crate::error::{Error, Result};
use crate::wxs::{self, Settings};
use anyhow::Context;
use tokio::fs;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with_args(args).await
}

/// Executes the generator for already-parsed arguments.
pub async fn run_with_args(args: Args) -> Result<i32> {
    args.validate().map_err(Error::InvalidConfig)?;

    let settings = load_settings(&args).await?;
    log::info!(
        "generating descriptor for {} v{}",
        settings.name(),
        settings.version()
    );

    let document = if args.compact {
        wxs::generate_compact(&settings).await?
    } else {
        wxs::generate(&settings).await?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &document).await?;
            log::info!("wrote descriptor to {}", path.display());
        }
        None => print!("{document}"),
    }

    Ok(0)
}

/// Loads settings from the configuration file named by `--config`, applying
/// the optional `--source` override.
async fn load_settings(args: &Args) -> Result<Settings> {
    let raw = fs::read_to_string(&args.config)
        .await
        .with_context(|| format!("failed to read config file {}", args.config.display()))?;

    let extension = args
        .config
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let mut settings: Settings = match extension {
        "toml" => toml::from_str(&raw)?,
        "json" => serde_json::from_str(&raw)?,
        other => {
            return Err(Error::InvalidConfig(format!(
                "unsupported config format: {other}"
            )));
        }
    };

    if let Some(source) = &args.source {
        settings = settings.with_source(source.clone());
    }

    Ok(settings)
}
