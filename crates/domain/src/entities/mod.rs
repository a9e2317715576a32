//! Domain Entities - Core business objects
//!
//! Policies, their rules and the model abstraction that lets an adapter
//! carry its native rule types through the reconciliation.

mod policy_document;
pub mod policy_model;
mod policy_summary;
pub mod rule_entry;

pub use policy_document::PolicyDocument;
pub use policy_model::{PolicyModel, PolicyRule, StandardModel};
pub use policy_summary::PolicySummary;
pub use rule_entry::{
    DefaultAction, ManagedRuleGroupStatement, OpaqueStatement, OverrideAction, RuleAction,
    RuleEntry, RuleGroupReferenceStatement, RuleStatement, VisibilityConfig,
};
