//! Configuration layering: defaults, file, environment, then flags

use crate::args::Cli;
use anyhow::{Context, Result};
use domain::config::{LogFormat, WafsyncConfig};
use infrastructure::config::{ConfigLoader, ConfigValidator};
use std::str::FromStr;
use tracing::Level;

/// Load file and environment config and apply command line flags on top
pub async fn resolve(cli: &Cli) -> Result<WafsyncConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_path(path.clone());
    }

    let mut config = loader.load().await?;
    apply_flags(&mut config, cli);
    ConfigValidator::new()
        .validate(&config)
        .context("Invalid configuration")?;
    Ok(config)
}

pub fn apply_flags(config: &mut WafsyncConfig, cli: &Cli) {
    if let Some(region) = &cli.region {
        config.aws.region = Some(region.clone());
    }
    if let Some(endpoint) = &cli.endpoint_url {
        config.aws.endpoint_url = Some(endpoint.clone());
    }
    if let Some(scope) = cli.scope {
        config.execution.scope = scope;
    }
    if let Some(concurrency) = cli.concurrency {
        config.execution.max_concurrency = concurrency;
    }
    if cli.dry_run {
        config.execution.dry_run = true;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }
}

/// Logging setup for the resolved configuration
pub fn logging_config(config: &WafsyncConfig) -> common::LoggingConfig {
    common::LoggingConfig {
        level: Level::from_str(&config.logging.level).unwrap_or(Level::INFO),
        json_output: config.logging.format == LogFormat::Json,
        color_output: std::io::IsTerminal::is_terminal(&std::io::stderr()),
        ..common::LoggingConfig::default()
    }
}
