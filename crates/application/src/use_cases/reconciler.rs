//! Policy Reconciler
//!
//! CHECK then APPLY for one fetched policy: skip when the rule group is
//! already referenced, otherwise append a reference and submit a
//! conditional update with the lock token of the same read.

use crate::dtos::{FailureKind, OutcomeStatus, PolicyOutcome};
use crate::ports::{PolicyManagementApi, UpdateFailure, UpdatePolicyRequest};
use domain::{
    build_rule_group_reference, decide, PolicyDocument, PolicyModel, PolicySummary,
    ReconcileDecision,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Rule group being applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroupTarget {
    /// Rule name used for the new entry and its metric
    pub name: String,
    pub arn: String,
}

impl RuleGroupTarget {
    pub fn new(name: impl Into<String>, arn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arn: arn.into(),
        }
    }
}

pub struct Reconciler<A: PolicyManagementApi> {
    api: Arc<A>,
    dry_run: bool,
}

impl<A: PolicyManagementApi> Reconciler<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            dry_run: false,
        }
    }

    /// Decide and report without calling update
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn reconcile(
        &self,
        summary: &PolicySummary,
        mut document: PolicyDocument<A::Model>,
        target: &RuleGroupTarget,
    ) -> PolicyOutcome {
        let policy_name = document.name.clone();
        let outcome = |status| PolicyOutcome::new(summary, status).with_policy_name(&policy_name);

        let assignment = match decide(&document.rules, &target.arn) {
            ReconcileDecision::AlreadyPresent {
                rule_name,
                priority,
            } => {
                info!(
                    policy = %policy_name,
                    rule = %rule_name,
                    priority,
                    "Rule group already present"
                );
                return outcome(OutcomeStatus::AlreadyPresent);
            }
            ReconcileDecision::Append(assignment) => assignment,
        };

        if assignment.adjusted {
            warn!(
                policy = %policy_name,
                rule_count = document.rule_count(),
                priority = assignment.priority,
                "Next priority was taken, appending after the highest priority instead"
            );
        }

        let entry = build_rule_group_reference(&target.name, &target.arn, assignment.priority);

        if self.dry_run {
            info!(
                policy = %policy_name,
                priority = assignment.priority,
                "Dry run, rule group would be added"
            );
            return outcome(OutcomeStatus::WouldAdd {
                priority: assignment.priority,
            });
        }

        let native = match A::Model::native_rule(&entry) {
            Ok(native) => native,
            Err(e) => {
                error!(policy = %policy_name, rule = %entry.to_json(), error = %e, "Cannot build rule");
                return outcome(OutcomeStatus::Failed {
                    kind: FailureKind::Validation,
                })
                .with_detail(e.to_string());
            }
        };

        let mut rules = std::mem::take(&mut document.rules);
        rules.push(native);
        let scope = summary.scope;
        let request = UpdatePolicyRequest::from_document(document, scope, rules);

        match self.api.update_policy(request).await {
            Ok(()) => {
                info!(
                    policy = %policy_name,
                    priority = assignment.priority,
                    "Rule group added"
                );
                outcome(OutcomeStatus::Added {
                    priority: assignment.priority,
                })
            }
            Err(failure) => {
                let kind = match &failure {
                    UpdateFailure::Validation(_) => {
                        error!(
                            policy = %policy_name,
                            rule = %entry.to_json(),
                            error = %failure,
                            "Policy rejected the new rule"
                        );
                        FailureKind::Validation
                    }
                    UpdateFailure::ConcurrencyConflict(_) => {
                        warn!(
                            policy = %policy_name,
                            error = %failure,
                            "Policy changed since it was read, not retrying"
                        );
                        FailureKind::ConcurrencyConflict
                    }
                    UpdateFailure::Other(_) => {
                        error!(policy = %policy_name, error = %failure, "Policy update failed");
                        FailureKind::UpdateFailed
                    }
                };
                outcome(OutcomeStatus::Failed { kind }).with_detail(failure.to_string())
            }
        }
    }
}
