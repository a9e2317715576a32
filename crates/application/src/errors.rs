//! Application Layer Errors
//!
//! Fatal setup errors abort a run; per-policy errors never leave the
//! orchestrator and end up as failed outcomes in the report.

use crate::ports::ApiError;
use domain::errors::DomainError;
use thiserror::Error;

/// Errors that halt the whole run
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Missing or unusable rule group ARN, raised before any remote call
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Policy listing failed
    #[error("Policy directory unavailable: {source}")]
    DirectoryUnavailable { source: ApiError },

    /// Orchestrator misconfiguration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApplicationError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get error category for logs
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::DirectoryUnavailable { .. } => "directory_unavailable",
            Self::Configuration { .. } => "configuration",
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        Self::invalid_argument(error.to_string())
    }
}

/// Per-policy detail fetch failure
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetailFetchError {
    #[error("Malformed policy identifier: {0}")]
    MalformedIdentifier(#[from] DomainError),

    #[error("Policy lookup failed: {0}")]
    Api(#[from] ApiError),
}

/// Application result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;
