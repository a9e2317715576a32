//! Rule Reference Builder
//!
//! Pure construction of a rule-group-reference entry.

use crate::entities::{
    OverrideAction, RuleEntry, RuleGroupReferenceStatement, RuleStatement, VisibilityConfig,
};

/// Build a rule entry referencing `arn` at `priority`.
///
/// The entry keeps the rule group's own actions (override `None`) and turns
/// on both request sampling and CloudWatch metrics under the rule name.
pub fn build_rule_group_reference(name: &str, arn: &str, priority: i32) -> RuleEntry {
    RuleEntry {
        name: name.to_string(),
        priority,
        statement: RuleStatement::RuleGroupReferenceStatement(RuleGroupReferenceStatement {
            arn: arn.to_string(),
        }),
        action: None,
        override_action: Some(OverrideAction::None),
        visibility_config: VisibilityConfig::enabled(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARN: &str = "arn:aws:wafv2:us-east-1:123456789012:regional/rulegroup/bots/42";

    #[test]
    fn test_builds_reference_entry() {
        let entry = build_rule_group_reference("bots", ARN, 4);

        assert_eq!(entry.name, "bots");
        assert_eq!(entry.priority, 4);
        assert_eq!(entry.rule_group_arn(), Some(ARN));
        assert_eq!(entry.override_action, Some(OverrideAction::None));
        assert_eq!(entry.action, None);
        assert!(entry.visibility_config.sampled_requests_enabled);
        assert!(entry.visibility_config.cloud_watch_metrics_enabled);
        assert_eq!(entry.visibility_config.metric_name, "bots");
    }

    proptest! {
        #[test]
        fn test_builder_is_deterministic(
            name in "[A-Za-z0-9_-]{1,64}",
            arn in "arn:aws:wafv2:[a-z0-9-]{1,12}:[0-9]{12}:regional/rulegroup/[a-z]{1,8}/[a-f0-9]{1,8}",
            priority in 0i32..10_000,
        ) {
            prop_assert_eq!(
                build_rule_group_reference(&name, &arn, priority),
                build_rule_group_reference(&name, &arn, priority)
            );
        }

        #[test]
        fn test_priority_only_changes_priority(
            name in "[A-Za-z0-9_-]{1,64}",
            first in 0i32..10_000,
            second in 0i32..10_000,
        ) {
            let a = build_rule_group_reference(&name, ARN, first);
            let mut b = build_rule_group_reference(&name, ARN, second);
            prop_assert_eq!(b.priority, second);

            b.priority = first;
            prop_assert_eq!(a, b);
        }
    }
}
