//! LockToken - optimistic concurrency fencing value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token tied to the policy version at read time.
///
/// An update must present the token returned by the same read that produced
/// the rule list being written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockToken(String);

impl LockToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LockToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for LockToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}
