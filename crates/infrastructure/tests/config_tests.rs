#[cfg(test)]
mod tests {
    use domain::config::*;
    use domain::Scope;
    use infrastructure::config::{ConfigLoader, ConfigSource, ConfigValidator};
    use std::env;
    use tempfile::TempDir;
    use tokio::fs;

    // every test uses its own prefix so parallel tests never see each other's variables
    fn loader(prefix: &str) -> ConfigLoader {
        ConfigLoader::new()
            .without_default_paths()
            .with_env_prefix(prefix)
    }

    #[tokio::test]
    async fn test_defaults_without_file() -> anyhow::Result<()> {
        let (config, source) = loader("WAFSYNC_T_DEFAULTS_").load_with_source().await?;

        assert_eq!(source, ConfigSource::Default);
        assert_eq!(config, WafsyncConfig::default());
        assert_eq!(config.execution.page_size, 100);
        assert_eq!(config.execution.max_concurrency, 1);
        assert_eq!(config.logging.level, "info");
        Ok(())
    }

    #[tokio::test]
    async fn test_config_loader_from_toml() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("wafsync.toml");

        let toml_content = r#"
[aws]
region = "eu-west-1"
endpoint_url = "http://localhost:4566"
timeout_ms = 5000

[execution]
scope = "CLOUDFRONT"
page_size = 50
max_concurrency = 4
dry_run = true

[logging]
level = "debug"
format = "json"
"#;

        fs::write(&config_path, toml_content).await?;

        let config = loader("WAFSYNC_T_TOML_")
            .with_path(config_path)
            .load()
            .await?;

        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.aws.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.aws.timeout_ms, Some(5000));
        assert_eq!(config.execution.scope, Scope::Cloudfront);
        assert_eq!(config.execution.page_size, 50);
        assert_eq!(config.execution.max_concurrency, 4);
        assert!(config.execution.dry_run);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_loader_from_json() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("wafsync.json");

        let json_content = r#"{
  "aws": { "region": "us-west-2" },
  "execution": { "max_concurrency": 2 }
}"#;

        fs::write(&config_path, json_content).await?;

        let config = loader("WAFSYNC_T_JSON_")
            .with_path(config_path)
            .load()
            .await?;

        assert_eq!(config.aws.region.as_deref(), Some("us-west-2"));
        assert_eq!(config.execution.max_concurrency, 2);
        assert_eq!(config.execution.page_size, 100);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = loader("WAFSYNC_T_MISSING_")
            .with_path(temp_dir.path().join("nope.toml"))
            .load()
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_env_overrides_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("wafsync.toml");
        fs::write(&config_path, "[aws]\nregion = \"eu-west-1\"\n").await?;

        let prefix = "WAFSYNC_T_ENV_";
        env::set_var(format!("{prefix}REGION"), "ap-south-1");
        env::set_var(format!("{prefix}MAX_CONCURRENCY"), "3");
        env::set_var(format!("{prefix}DRY_RUN"), "yes");
        env::set_var(format!("{prefix}LOG_FORMAT"), "json");
        env::set_var(format!("{prefix}SCOPE"), "global");

        let config = loader(prefix).with_path(config_path).load().await?;

        assert_eq!(config.aws.region.as_deref(), Some("ap-south-1"));
        assert_eq!(config.execution.max_concurrency, 3);
        assert!(config.execution.dry_run);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.execution.scope, Scope::Cloudfront);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_env_value_is_an_error() {
        let prefix = "WAFSYNC_T_BAD_ENV_";
        env::set_var(format!("{prefix}PAGE_SIZE"), "lots");

        let result = loader(prefix).load().await;

        assert!(result.is_err());
    }

    #[test]
    fn test_validator_accepts_loaded_defaults() {
        let validator = ConfigValidator::new();
        assert!(validator.validate(&WafsyncConfig::default()).is_ok());

        let mut config = WafsyncConfig::default();
        config.execution.page_size = 0;
        assert!(validator.validate(&config).is_err());
    }
}
