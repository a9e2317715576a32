//! ResourceArn - Structured resource identifier
//!
//! Parses `arn:partition:service:region:account:resource` and exposes the
//! trailing `{name}/{id}` pair of the resource path.

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ARN_FIELDS: usize = 6;

/// Parsed ARN of a firewall policy or rule group
///
/// Resource path looks like `regional/webacl/{name}/{id}`; only the last two
/// segments carry meaning for the reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceArn {
    raw: String,
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource: Vec<String>,
}

impl ResourceArn {
    /// Parse and validate an ARN string
    pub fn parse(input: &str) -> DomainResult<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(DomainError::malformed_identifier(input, "identifier is empty"));
        }

        let fields: Vec<&str> = raw.splitn(ARN_FIELDS, ':').collect();
        if fields.len() != ARN_FIELDS {
            return Err(DomainError::malformed_identifier(
                input,
                format!("expected {ARN_FIELDS} ':'-separated fields, got {}", fields.len()),
            ));
        }
        if fields[0] != "arn" {
            return Err(DomainError::malformed_identifier(input, "missing 'arn' prefix"));
        }
        if fields[1].is_empty() || fields[2].is_empty() {
            return Err(DomainError::malformed_identifier(
                input,
                "partition and service must not be empty",
            ));
        }

        let resource: Vec<String> = fields[5].split('/').map(str::to_string).collect();
        if resource.len() < 2 {
            return Err(DomainError::malformed_identifier(
                input,
                "resource path needs at least two '/'-separated segments",
            ));
        }
        if resource[resource.len() - 2..].iter().any(String::is_empty) {
            return Err(DomainError::malformed_identifier(
                input,
                "trailing name and id segments must not be empty",
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            partition: fields[1].to_string(),
            service: fields[2].to_string(),
            region: fields[3].to_string(),
            account_id: fields[4].to_string(),
            resource,
        })
    }

    /// Resource name, the segment preceding the trailing id
    pub fn name(&self) -> &str {
        &self.resource[self.resource.len() - 2]
    }

    /// Trailing resource id
    pub fn id(&self) -> &str {
        &self.resource[self.resource.len() - 1]
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ResourceArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ResourceArn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceArn {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResourceArn> for String {
    fn from(arn: ResourceArn) -> Self {
        arn.raw
    }
}
