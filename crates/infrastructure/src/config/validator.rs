use anyhow::{bail, Result};
use domain::config::{AwsConfig, ExecutionConfig, LoggingConfig, WafsyncConfig, MAX_PAGE_SIZE};
use tracing::warn;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, config: &WafsyncConfig) -> Result<()> {
        self.validate_aws_config(&config.aws)?;
        self.validate_execution_config(&config.execution)?;
        self.validate_logging_config(&config.logging)?;
        Ok(())
    }

    fn validate_aws_config(&self, config: &AwsConfig) -> Result<()> {
        if let Some(region) = &config.region {
            if region.trim().is_empty() {
                bail!("region must not be empty");
            }
        }

        if let Some(endpoint) = &config.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                bail!("endpoint_url must start with http:// or https://, got '{endpoint}'");
            }
        }

        if config.timeout_ms == Some(0) {
            bail!("timeout_ms must be greater than 0");
        }

        Ok(())
    }

    fn validate_execution_config(&self, config: &ExecutionConfig) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&config.page_size) {
            bail!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                config.page_size
            );
        }

        if config.max_concurrency == 0 {
            bail!("max_concurrency must be greater than 0");
        }

        if config.max_concurrency > 16 {
            warn!(
                "max_concurrency {} is high, the control plane may throttle requests",
                config.max_concurrency
            );
        }

        Ok(())
    }

    fn validate_logging_config(&self, config: &LoggingConfig) -> Result<()> {
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
            bail!(
                "Invalid log level: {}. Must be one of: {:?}",
                config.level,
                valid_levels
            );
        }
        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
