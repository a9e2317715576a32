//! RuleEntry - a single rule inside a firewall policy
//!
//! Serialized field names follow the service's JSON shape (`Name`,
//! `Priority`, `Statement`, ...) so a logged entry can be pasted straight
//! into a console or CLI request while diagnosing a rejected update.

use serde::{Deserialize, Serialize};

/// Rule entry, polymorphic over its statement kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleEntry {
    pub name: String,
    pub priority: i32,
    pub statement: RuleStatement,
    /// Action for plain rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RuleAction>,
    /// Action override for rule-group statements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_action: Option<OverrideAction>,
    pub visibility_config: VisibilityConfig,
}

impl RuleEntry {
    /// ARN of the referenced rule group, if this is a rule-group reference
    pub fn rule_group_arn(&self) -> Option<&str> {
        match &self.statement {
            RuleStatement::RuleGroupReferenceStatement(reference) => Some(&reference.arn),
            _ => None,
        }
    }

    /// Serialized form used in diagnostics
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable rule: {e}>"))
    }
}

/// Statement variants the reconciliation distinguishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleStatement {
    RuleGroupReferenceStatement(RuleGroupReferenceStatement),
    ManagedRuleGroupStatement(ManagedRuleGroupStatement),
    /// Any other statement kind, kept opaque
    Other(OpaqueStatement),
}

/// Reference to an externally managed rule group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroupReferenceStatement {
    #[serde(rename = "ARN")]
    pub arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedRuleGroupStatement {
    pub vendor_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpaqueStatement {
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    Allow,
    Block,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverrideAction {
    /// Keep the actions configured inside the rule group
    None,
    /// Downgrade every rule group action to count
    Count,
}

/// Policy-level action for requests no rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DefaultAction {
    #[default]
    Allow,
    Block,
}

/// Sampling and metrics settings of a rule or policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisibilityConfig {
    pub sampled_requests_enabled: bool,
    pub cloud_watch_metrics_enabled: bool,
    pub metric_name: String,
}

impl VisibilityConfig {
    /// Sampling and metrics both on
    pub fn enabled(metric_name: impl Into<String>) -> Self {
        Self {
            sampled_requests_enabled: true,
            cloud_watch_metrics_enabled: true,
            metric_name: metric_name.into(),
        }
    }
}
