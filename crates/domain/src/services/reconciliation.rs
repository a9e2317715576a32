//! Reconciliation decision
//!
//! CHECK step of the per-policy state machine: a policy either already
//! references the rule group (skip) or gets a new entry appended at a free
//! priority.

use crate::entities::PolicyRule;

/// Result of checking a policy's rule list against the target ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileDecision {
    /// A rule already references the rule group
    AlreadyPresent { rule_name: String, priority: i32 },
    /// The rule group must be appended
    Append(PriorityAssignment),
}

/// Priority chosen for a new rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityAssignment {
    pub priority: i32,
    /// `count + 1` collided with an existing priority and `max + 1` was used
    pub adjusted: bool,
}

/// Decide whether `target_arn` must be added to `rules`
pub fn decide<R: PolicyRule>(rules: &[R], target_arn: &str) -> ReconcileDecision {
    match rules.iter().find(|rule| rule.rule_group_arn() == Some(target_arn)) {
        Some(existing) => ReconcileDecision::AlreadyPresent {
            rule_name: existing.name().to_string(),
            priority: existing.priority(),
        },
        None => ReconcileDecision::Append(next_priority(rules)),
    }
}

/// Priority for a rule appended to `rules`.
///
/// `count + 1` when free, which matches contiguous lists starting at 0 or 1.
/// Lists with gaps can already use that value; then `max + 1` is taken.
pub fn next_priority<R: PolicyRule>(rules: &[R]) -> PriorityAssignment {
    let candidate = i32::try_from(rules.len())
        .unwrap_or(i32::MAX - 1)
        .saturating_add(1);

    if rules.iter().all(|rule| rule.priority() != candidate) {
        return PriorityAssignment {
            priority: candidate,
            adjusted: false,
        };
    }

    let max = rules.iter().map(PolicyRule::priority).max().unwrap_or(0);
    PriorityAssignment {
        priority: max.saturating_add(1),
        adjusted: true,
    }
}
