//! Domain Layer - WAFSYNC Business Logic
//!
//! Contains ONLY pure reconciliation logic without dependencies on:
//! - Infrastructure (cloud SDKs, file systems, networks)
//! - Frameworks (CLI, async runtimes)
//!
//! Layout:
//! - Value Objects: immutable identifiers (ResourceArn, Scope, LockToken)
//! - Entities: policy summaries, policy documents and rule entries
//! - Services: rule reference builder and the reconciliation decision
//! - Config: typed settings shared by every outer layer

pub mod config;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

// Re-export core domain types
pub use entities::{
    DefaultAction, OverrideAction, PolicyDocument, PolicyModel, PolicyRule, PolicySummary,
    RuleAction, RuleEntry, RuleGroupReferenceStatement, RuleStatement, StandardModel,
    VisibilityConfig,
};
pub use errors::{DomainError, DomainResult};
pub use services::{
    build_rule_group_reference, decide, next_priority, PriorityAssignment, ReconcileDecision,
};
pub use value_objects::{LockToken, ResourceArn, Scope};

/// Rule priority as used by the firewall service
pub type RulePriority = i32;
