//! Scope - resource namespace a policy lives in

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regional vs. global (CloudFront edge) policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    /// Policies attached to regional resources (ALB, API Gateway, ...)
    #[default]
    Regional,
    /// Global policies attached to CloudFront distributions
    #[serde(alias = "GLOBAL")]
    Cloudfront,
}

impl Scope {
    /// Wire name used by the control-plane API
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Regional => "REGIONAL",
            Scope::Cloudfront => "CLOUDFRONT",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REGIONAL" => Ok(Scope::Regional),
            "CLOUDFRONT" | "GLOBAL" => Ok(Scope::Cloudfront),
            _ => Err(DomainError::InvalidScope(s.to_string())),
        }
    }
}
