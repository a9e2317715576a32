use crate::errors::DomainError;
use crate::value_objects::Scope;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest page the policy listing accepts
pub const MAX_PAGE_SIZE: i32 = 100;

/// Top-level configuration, layered from file, environment and CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WafsyncConfig {
    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub execution: ExecutionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Control-plane client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AwsConfig {
    /// Region override, SDK default chain when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Endpoint override (e.g. LocalStack)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Per-operation timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    #[serde(default)]
    pub scope: Scope,

    /// Policies requested from the directory listing (first page only)
    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Policies reconciled at the same time
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Check and plan without writing
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            scope: Scope::default(),
            page_size: default_page_size(),
            max_concurrency: default_max_concurrency(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(DomainError::InvalidLogFormat(other.to_string())),
        }
    }
}

fn default_page_size() -> i32 {
    MAX_PAGE_SIZE
}

fn default_max_concurrency() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}
