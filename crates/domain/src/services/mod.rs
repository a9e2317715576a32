//! Domain Services - Pure business logic
//!
//! No I/O: builds rule entries and decides what a policy needs.

pub mod reconciliation;
pub mod rule_reference_builder;

pub use reconciliation::{decide, next_priority, PriorityAssignment, ReconcileDecision};
pub use rule_reference_builder::build_rule_group_reference;
