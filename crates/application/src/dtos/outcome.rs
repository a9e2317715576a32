//! Per-policy outcomes and the run report
//!
//! The orchestrator returns these instead of printing; the caller picks the
//! presentation and the exit code.

use domain::{PolicySummary, Scope};
use serde::{Deserialize, Serialize};

/// Why a policy could not be reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Detail fetch failed, found no policy, or the policy ARN could not be parsed
    DetailFetchFailed,
    /// The service rejected the new rule structure
    Validation,
    /// The lock token was stale
    ConcurrencyConflict,
    /// Any other update failure
    UpdateFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Rule group reference appended
    Added { priority: i32 },
    /// Dry run: rule group reference would be appended
    WouldAdd { priority: i32 },
    /// Policy already references the rule group
    AlreadyPresent,
    Failed { kind: FailureKind },
}

/// Result for one policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    pub policy_name: String,
    pub policy_arn: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl PolicyOutcome {
    pub fn new(summary: &PolicySummary, status: OutcomeStatus) -> Self {
        Self {
            policy_name: summary.display_name().to_string(),
            policy_arn: summary.arn.clone(),
            status,
            detail: None,
        }
    }

    pub fn failed(summary: &PolicySummary, kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::new(summary, OutcomeStatus::Failed { kind }).with_detail(detail)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Use the policy name from the fetched document
    pub fn with_policy_name(mut self, name: impl Into<String>) -> Self {
        self.policy_name = name.into();
        self
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Listing returned no policies
    NothingToDo,
    /// Every listed policy was attempted
    Completed,
}

/// Counts per outcome status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub added: usize,
    pub would_add: usize,
    pub already_present: usize,
    pub failed: usize,
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub run_id: String,
    pub rule_group_arn: String,
    pub rule_group_name: String,
    pub scope: Scope,
    pub dry_run: bool,
    pub status: RunStatus,
    pub outcomes: Vec<PolicyOutcome>,
}

impl ExecutionReport {
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.outcomes.len(),
            ..ReportSummary::default()
        };
        for outcome in &self.outcomes {
            match outcome.status {
                OutcomeStatus::Added { .. } => summary.added += 1,
                OutcomeStatus::WouldAdd { .. } => summary.would_add += 1,
                OutcomeStatus::AlreadyPresent => summary.already_present += 1,
                OutcomeStatus::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(PolicyOutcome::is_failure)
    }

    /// Outcome for a policy by name
    pub fn outcome_for(&self, policy_name: &str) -> Option<&PolicyOutcome> {
        self.outcomes.iter().find(|o| o.policy_name == policy_name)
    }
}
