//! PolicySummary - directory listing entry

use crate::value_objects::{LockToken, Scope};
use serde::{Deserialize, Serialize};

/// Snapshot of a policy as returned by the directory listing
///
/// The ARN is kept as the raw string the service returned; it is parsed
/// only when the detail fetch needs the `{name, id}` pair, so a single
/// malformed entry cannot spoil the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub arn: String,
    pub name: Option<String>,
    /// Token at listing time, informational only
    pub lock_token: Option<LockToken>,
    pub scope: Scope,
}

impl PolicySummary {
    pub fn new(arn: impl Into<String>, scope: Scope) -> Self {
        Self {
            arn: arn.into(),
            name: None,
            lock_token: None,
            scope,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_lock_token(mut self, token: impl Into<LockToken>) -> Self {
        self.lock_token = Some(token.into());
        self
    }

    /// Name for reports, falls back to the ARN
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.arn)
    }
}
