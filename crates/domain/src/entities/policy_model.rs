//! PolicyModel - representation a policy API works in
//!
//! Reconciliation only needs to look at rule names, priorities and
//! rule-group references; everything else is carried through untouched.
//! An adapter plugs its native types in through [`PolicyModel`] so rules the
//! reconciliation does not understand are written back exactly as read.

use super::rule_entry::{DefaultAction, RuleEntry, VisibilityConfig};
use crate::errors::DomainResult;
use std::fmt;

/// Read-only view of a rule
pub trait PolicyRule: Clone + fmt::Debug + PartialEq + Send + Sync {
    fn name(&self) -> &str;

    fn priority(&self) -> i32;

    /// ARN of the referenced rule group when the statement is a rule-group reference
    fn rule_group_arn(&self) -> Option<&str>;
}

/// Native types of a policy API
pub trait PolicyModel: Send + Sync + 'static {
    type Rule: PolicyRule;
    type DefaultAction: Clone + fmt::Debug + PartialEq + Send + Sync;
    type VisibilityConfig: Clone + fmt::Debug + PartialEq + Send + Sync;
    /// Policy-level settings an update has to send back unchanged
    type Settings: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Convert a domain rule entry into the model's native rule
    fn native_rule(entry: &RuleEntry) -> DomainResult<Self::Rule>;
}

/// Model built from the domain's own types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardModel;

impl PolicyModel for StandardModel {
    type Rule = RuleEntry;
    type DefaultAction = DefaultAction;
    type VisibilityConfig = VisibilityConfig;
    type Settings = ();

    fn native_rule(entry: &RuleEntry) -> DomainResult<RuleEntry> {
        Ok(entry.clone())
    }
}

impl PolicyRule for RuleEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn rule_group_arn(&self) -> Option<&str> {
        RuleEntry::rule_group_arn(self)
    }
}
