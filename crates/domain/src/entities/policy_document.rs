//! PolicyDocument - full mutable state of one policy
//!
//! Fetched fresh right before a conditional write. The lock token travels
//! with the document so an update can only ever pair a rule list with the
//! token of the read that produced it.

use super::policy_model::{PolicyModel, PolicyRule, StandardModel};
use crate::value_objects::LockToken;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDocument<M: PolicyModel = StandardModel> {
    pub name: String,
    pub id: String,
    pub lock_token: LockToken,
    pub default_action: M::DefaultAction,
    pub visibility_config: M::VisibilityConfig,
    pub settings: M::Settings,
    /// Ordered rule list, order is preserved on write
    pub rules: Vec<M::Rule>,
}

impl<M: PolicyModel> PolicyDocument<M> {
    /// First rule referencing the given rule group ARN
    pub fn find_rule_group_reference(&self, arn: &str) -> Option<&M::Rule> {
        self.rules.iter().find(|rule| rule.rule_group_arn() == Some(arn))
    }

    pub fn references_rule_group(&self, arn: &str) -> bool {
        self.find_rule_group_reference(arn).is_some()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Priorities currently in use
    pub fn priorities(&self) -> BTreeSet<i32> {
        self.rules.iter().map(PolicyRule::priority).collect()
    }
}
