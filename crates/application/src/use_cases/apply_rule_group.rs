//! Apply Rule Group Use Case
//!
//! Runs the per-policy pipeline LIST -> FETCH -> CHECK -> APPLY for every
//! policy in a scope and collects one outcome per policy. A failure on one
//! policy never stops the others.

use crate::dtos::{ExecutionReport, FailureKind, PolicyOutcome, RunStatus};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::ports::PolicyManagementApi;
use crate::use_cases::{PolicyDetailFetcher, PolicyDirectoryReader, Reconciler, RuleGroupTarget};
use common::OperationTimer;
use domain::config::{ExecutionConfig, MAX_PAGE_SIZE};
use domain::{PolicySummary, ResourceArn, Scope};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Run-wide knobs for the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub scope: Scope,
    pub page_size: i32,
    /// Policies processed at the same time; outcomes stay in listing order
    pub max_concurrency: usize,
    pub dry_run: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self::from(&ExecutionConfig::default())
    }
}

impl From<&ExecutionConfig> for ExecutionOptions {
    fn from(config: &ExecutionConfig) -> Self {
        Self {
            scope: config.scope,
            page_size: config.page_size,
            max_concurrency: config.max_concurrency,
            dry_run: config.dry_run,
        }
    }
}

impl ExecutionOptions {
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    fn validate(&self) -> ApplicationResult<()> {
        if self.max_concurrency == 0 {
            return Err(ApplicationError::configuration(
                "max_concurrency must be greater than zero",
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ApplicationError::configuration(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}

pub struct RuleGroupOrchestrator<A: PolicyManagementApi> {
    reader: PolicyDirectoryReader<A>,
    fetcher: PolicyDetailFetcher<A>,
    reconciler: Reconciler<A>,
    options: ExecutionOptions,
}

impl<A: PolicyManagementApi> RuleGroupOrchestrator<A> {
    pub fn new(api: Arc<A>, options: ExecutionOptions) -> Self {
        Self {
            reader: PolicyDirectoryReader::new(Arc::clone(&api)),
            fetcher: PolicyDetailFetcher::new(Arc::clone(&api)),
            reconciler: Reconciler::new(api).with_dry_run(options.dry_run),
            options,
        }
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Apply the rule group identified by `rule_group_arn` to every policy
    /// in the configured scope.
    ///
    /// `rule_group_arn` must be a full ARN. The rule name is taken from its
    /// resource path, so a bare identifier such as `rg-1-arn` is rejected
    /// with `InvalidArgument` before any remote call.
    ///
    /// Errors only for problems that make the whole run impossible; every
    /// per-policy problem is reported in the returned outcomes.
    #[instrument(skip(self), fields(scope = %self.options.scope, dry_run = self.options.dry_run))]
    pub async fn execute(&self, rule_group_arn: &str) -> ApplicationResult<ExecutionReport> {
        let rule_group_arn = rule_group_arn.trim();
        if rule_group_arn.is_empty() {
            return Err(ApplicationError::invalid_argument(
                "rule group ARN must not be empty",
            ));
        }
        self.options.validate()?;

        let parsed = ResourceArn::parse(rule_group_arn)?;
        let target = RuleGroupTarget::new(parsed.name(), rule_group_arn);
        let run_id = Uuid::new_v4().to_string();

        let mut timer = OperationTimer::new("apply_rule_group");
        timer.add_field("run_id", &run_id);
        timer.add_field("rule_group", &target.name);

        let summaries = match self
            .reader
            .list(self.options.scope, self.options.page_size)
            .await
        {
            Ok(summaries) => summaries,
            Err(e) => {
                timer.finish_with_result(Err::<(), _>(&e));
                return Err(e);
            }
        };

        let mut report = ExecutionReport {
            run_id,
            rule_group_arn: target.arn.clone(),
            rule_group_name: target.name.clone(),
            scope: self.options.scope,
            dry_run: self.options.dry_run,
            status: RunStatus::NothingToDo,
            outcomes: Vec::with_capacity(summaries.len()),
        };

        if summaries.is_empty() {
            info!(scope = %self.options.scope, "No policies found, nothing to do");
            timer.finish_with_result(Ok::<(), String>(()));
            return Ok(report);
        }

        info!(
            policies = summaries.len(),
            rule_group = %target.name,
            "Applying rule group"
        );

        report.outcomes = stream::iter(summaries.iter())
            .map(|summary| self.process_policy(summary, &target))
            .buffered(self.options.max_concurrency)
            .collect()
            .await;
        report.status = RunStatus::Completed;

        let summary = report.summary();
        timer.add_field("policies", summary.total);
        timer.add_field("failed", summary.failed);
        timer.finish_with_result(Ok::<(), String>(()));

        Ok(report)
    }

    async fn process_policy(&self, summary: &PolicySummary, target: &RuleGroupTarget) -> PolicyOutcome {
        match self.fetcher.fetch(summary).await {
            Ok(Some(document)) => self.reconciler.reconcile(summary, document, target).await,
            Ok(None) => {
                warn!(policy = %summary.display_name(), "Policy not found when fetching details");
                PolicyOutcome::failed(
                    summary,
                    FailureKind::DetailFetchFailed,
                    "policy not found when fetching details",
                )
            }
            Err(e) => {
                warn!(policy = %summary.display_name(), error = %e, "Skipping policy, detail fetch failed");
                PolicyOutcome::failed(summary, FailureKind::DetailFetchFailed, e.to_string())
            }
        }
    }
}
