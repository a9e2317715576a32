use anyhow::{bail, Context, Result};
use domain::config::{LogFormat, WafsyncConfig};
use domain::Scope;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info, warn};

pub const DEFAULT_ENV_PREFIX: &str = "WAFSYNC_";

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            config_paths: Self::default_config_paths(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Explicit config file; it must exist and parse
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.explicit_path = Some(path);
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip the current-directory and user config lookups
    pub fn without_default_paths(mut self) -> Self {
        self.config_paths.clear();
        self
    }

    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("wafsync.toml"), PathBuf::from("wafsync.json")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("wafsync").join("config.toml"));
            paths.push(config_dir.join("wafsync").join("config.json"));
        }

        paths
    }

    pub async fn load(&self) -> Result<WafsyncConfig> {
        let (config, source) = self.load_with_source().await?;
        debug!(?source, "Configuration loaded");
        Ok(config)
    }

    /// Load file config then apply environment overrides
    pub async fn load_with_source(&self) -> Result<(WafsyncConfig, ConfigSource)> {
        let (config, source) = self.load_base_config().await?;
        let config = self.apply_env_overrides(config)?;
        Ok((config, source))
    }

    async fn load_base_config(&self) -> Result<(WafsyncConfig, ConfigSource)> {
        if let Some(path) = &self.explicit_path {
            let config = self
                .load_file(path)
                .await
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            info!("Loaded configuration from: {}", path.display());
            return Ok((config, ConfigSource::File(path.clone())));
        }

        for path in &self.config_paths {
            if path.exists() {
                match self.load_file(path).await {
                    Ok(config) => {
                        info!("Loaded configuration from: {}", path.display());
                        return Ok((config, ConfigSource::File(path.clone())));
                    }
                    Err(e) => {
                        warn!("Failed to load config from {}: {:#}", path.display(), e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Ok((WafsyncConfig::default(), ConfigSource::Default))
    }

    async fn load_file(&self, path: &Path) -> Result<WafsyncConfig> {
        let content = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        match extension {
            "toml" | "" => toml::from_str(&content).context("Failed to parse TOML config"),
            "json" => serde_json::from_str(&content).context("Failed to parse JSON config"),
            _ => {
                // Try TOML first, then JSON
                toml::from_str(&content)
                    .or_else(|_| serde_json::from_str(&content))
                    .context("Failed to parse config file")
            }
        }
    }

    fn var(&self, name: &str) -> Option<(String, String)> {
        let key = format!("{}{}", self.env_prefix, name);
        env::var(&key).ok().map(|value| (key, value))
    }

    fn apply_env_overrides(&self, mut config: WafsyncConfig) -> Result<WafsyncConfig> {
        // AWS client settings
        if let Some((_, region)) = self.var("REGION") {
            config.aws.region = Some(region);
        }

        if let Some((_, endpoint)) = self.var("ENDPOINT_URL") {
            config.aws.endpoint_url = Some(endpoint);
        }

        if let Some((key, timeout)) = self.var("TIMEOUT_MS") {
            config.aws.timeout_ms = Some(
                timeout
                    .parse()
                    .with_context(|| format!("{key} must be a number of milliseconds"))?,
            );
        }

        // Execution settings
        if let Some((key, scope)) = self.var("SCOPE") {
            config.execution.scope =
                Scope::from_str(&scope).with_context(|| format!("Invalid {key}"))?;
        }

        if let Some((key, page_size)) = self.var("PAGE_SIZE") {
            config.execution.page_size = page_size
                .parse()
                .with_context(|| format!("{key} must be an integer"))?;
        }

        if let Some((key, concurrency)) = self.var("MAX_CONCURRENCY") {
            config.execution.max_concurrency = concurrency
                .parse()
                .with_context(|| format!("{key} must be a positive integer"))?;
        }

        if let Some((key, dry_run)) = self.var("DRY_RUN") {
            config.execution.dry_run = parse_flag(&key, &dry_run)?;
        }

        // Logging settings
        if let Some((_, level)) = self.var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some((key, format)) = self.var("LOG_FORMAT") {
            config.logging.format =
                LogFormat::from_str(&format).with_context(|| format!("Invalid {key}"))?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => bail!("{key} must be true or false, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("K", "TRUE").unwrap());
        assert!(parse_flag("K", "1").unwrap());
        assert!(!parse_flag("K", "no").unwrap());
        assert!(parse_flag("K", "maybe").is_err());
    }
}
