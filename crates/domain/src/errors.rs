//! Domain Errors - Business rule violations
//!
//! Contains ONLY business logic errors, no transport or SDK errors

use thiserror::Error;

/// Domain-specific errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier does not have the `arn:partition:service:region:account:resource` shape
    #[error("Malformed identifier '{input}': {reason}")]
    MalformedIdentifier { input: String, reason: String },

    /// Unknown scope name
    #[error("Invalid scope: {0}, expected REGIONAL or CLOUDFRONT")]
    InvalidScope(String),

    /// Unknown log format name
    #[error("Invalid log format: {0}, expected text or json")]
    InvalidLogFormat(String),

    /// A rule entry cannot be expressed in the target model
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn malformed_identifier(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Check if error is an input validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedIdentifier { .. }
                | DomainError::InvalidScope(_)
                | DomainError::InvalidLogFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categorization() {
        assert!(DomainError::malformed_identifier("x", "no colon").is_validation_error());
        assert!(DomainError::InvalidScope("EDGE2".into()).is_validation_error());
        assert!(!DomainError::invalid_rule("r", "unsupported statement").is_validation_error());
    }

    #[test]
    fn test_error_messages() {
        let error = DomainError::malformed_identifier("rg-1", "expected 6 ':'-separated fields");
        assert!(error.to_string().contains("rg-1"));
        assert!(error.to_string().contains("6 ':'-separated fields"));
    }
}
