//! In-memory policy management API for use case tests
//!
//! Behaves like the remote service where the reconciliation cares:
//! versioned lock tokens, schema checks on update, and injectable failures.

#![allow(dead_code)]

use application::ports::{
    ApiError, ApiResult, PolicyManagementApi, UpdateFailure, UpdatePolicyRequest,
};
use async_trait::async_trait;
use domain::entities::OpaqueStatement;
use domain::{
    DefaultAction, LockToken, PolicyDocument, PolicySummary, RuleAction, RuleEntry,
    RuleStatement, Scope, StandardModel, VisibilityConfig,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const RULE_GROUP_ARN: &str =
    "arn:aws:wafv2:us-east-1:123456789012:regional/rulegroup/bot-control/0f2c9d1e";
pub const OTHER_RULE_GROUP_ARN: &str =
    "arn:aws:wafv2:us-east-1:123456789012:regional/rulegroup/geo-block/77aa01bc";

pub fn policy_arn(name: &str) -> String {
    format!("arn:aws:wafv2:us-east-1:123456789012:regional/webacl/{name}/{}", policy_id(name))
}

pub fn policy_id(name: &str) -> String {
    format!("id-{name}")
}

/// A plain rule that is not a rule group reference
pub fn rate_rule(name: &str, priority: i32) -> RuleEntry {
    RuleEntry {
        name: name.to_string(),
        priority,
        statement: RuleStatement::Other(OpaqueStatement {
            kind: "RateBasedStatement".into(),
        }),
        action: Some(RuleAction::Block),
        override_action: None,
        visibility_config: VisibilityConfig::enabled(name),
    }
}

#[derive(Debug, Clone)]
pub struct StoredPolicy {
    pub name: String,
    pub id: String,
    pub version: u32,
    pub default_action: DefaultAction,
    pub visibility_config: VisibilityConfig,
    pub rules: Vec<RuleEntry>,
}

impl StoredPolicy {
    fn lock_token(&self) -> LockToken {
        LockToken::new(format!("{}-v{}", self.id, self.version))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub get: usize,
    pub update: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.list + self.get + self.update
    }
}

#[derive(Default)]
struct State {
    policies: Vec<StoredPolicy>,
    /// Listing entries without a stored policy behind them
    extra_summaries: Vec<PolicySummary>,
    list_error: Option<ApiError>,
    get_errors: HashMap<String, ApiError>,
    update_failures: HashMap<String, UpdateFailure>,
    /// Listed but gone by the time they are fetched
    deleted_after_listing: HashSet<String>,
    /// Another writer bumps the version right after our read
    concurrent_writers: HashSet<String>,
    calls: CallCounts,
    updates: Vec<UpdatePolicyRequest<StandardModel>>,
}

#[derive(Default)]
pub struct InMemoryPolicyApi {
    state: Mutex<State>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryPolicyApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(self, name: &str, rules: Vec<RuleEntry>) -> Self {
        self.lock().policies.push(StoredPolicy {
            name: name.to_string(),
            id: policy_id(name),
            version: 1,
            default_action: DefaultAction::Allow,
            visibility_config: VisibilityConfig::enabled(name),
            rules,
        });
        self
    }

    pub fn with_listing_entry(self, summary: PolicySummary) -> Self {
        self.lock().extra_summaries.push(summary);
        self
    }

    pub fn with_list_error(self, error: ApiError) -> Self {
        self.lock().list_error = Some(error);
        self
    }

    pub fn with_get_error(self, name: &str, error: ApiError) -> Self {
        self.lock().get_errors.insert(name.to_string(), error);
        self
    }

    pub fn with_update_failure(self, name: &str, failure: UpdateFailure) -> Self {
        self.lock().update_failures.insert(name.to_string(), failure);
        self
    }

    pub fn with_deleted_after_listing(self, name: &str) -> Self {
        self.lock().deleted_after_listing.insert(name.to_string());
        self
    }

    pub fn with_concurrent_writer(self, name: &str) -> Self {
        self.lock().concurrent_writers.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> CallCounts {
        self.lock().calls
    }

    pub fn policy(&self, name: &str) -> StoredPolicy {
        self.lock()
            .policies
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("no stored policy named {name}"))
    }

    pub fn updates(&self) -> Vec<UpdatePolicyRequest<StandardModel>> {
        self.lock().updates.clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl PolicyManagementApi for InMemoryPolicyApi {
    type Model = StandardModel;

    async fn list_policies(&self, scope: Scope, limit: i32) -> ApiResult<Vec<PolicySummary>> {
        let mut state = self.lock();
        state.calls.list += 1;
        if let Some(error) = state.list_error.clone() {
            return Err(error);
        }

        let mut summaries: Vec<PolicySummary> = state
            .policies
            .iter()
            .map(|p| {
                PolicySummary::new(policy_arn(&p.name), scope)
                    .with_name(&p.name)
                    .with_lock_token(p.lock_token())
            })
            .collect();
        summaries.extend(state.extra_summaries.iter().cloned());
        summaries.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(summaries)
    }

    async fn get_policy(
        &self,
        name: &str,
        _scope: Scope,
        id: &str,
    ) -> ApiResult<Option<PolicyDocument<StandardModel>>> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let mut state = self.lock();
        state.calls.get += 1;
        if let Some(error) = state.get_errors.get(name).cloned() {
            return Err(error);
        }
        if state.deleted_after_listing.contains(name) {
            return Ok(None);
        }

        let bump = state.concurrent_writers.contains(name);
        let Some(policy) = state
            .policies
            .iter_mut()
            .find(|p| p.name == name && p.id == id)
        else {
            return Ok(None);
        };

        let document = PolicyDocument {
            name: policy.name.clone(),
            id: policy.id.clone(),
            lock_token: policy.lock_token(),
            default_action: policy.default_action.clone(),
            visibility_config: policy.visibility_config.clone(),
            settings: (),
            rules: policy.rules.clone(),
        };
        if bump {
            policy.version += 1;
        }
        Ok(Some(document))
    }

    async fn update_policy(
        &self,
        request: UpdatePolicyRequest<StandardModel>,
    ) -> Result<(), UpdateFailure> {
        let mut state = self.lock();
        state.calls.update += 1;
        state.updates.push(request.clone());

        if let Some(failure) = state.update_failures.get(&request.name).cloned() {
            return Err(failure);
        }

        let Some(policy) = state
            .policies
            .iter_mut()
            .find(|p| p.name == request.name && p.id == request.id)
        else {
            return Err(UpdateFailure::Other(format!("{} does not exist", request.name)));
        };

        if policy.lock_token() != request.lock_token {
            return Err(UpdateFailure::ConcurrencyConflict(format!(
                "lock token {} is stale",
                request.lock_token
            )));
        }

        let mut priorities = HashSet::new();
        let mut names = HashSet::new();
        for rule in &request.rules {
            if !priorities.insert(rule.priority) {
                return Err(UpdateFailure::Validation(format!(
                    "duplicate priority {}",
                    rule.priority
                )));
            }
            if !names.insert(rule.name.clone()) {
                return Err(UpdateFailure::Validation(format!(
                    "duplicate rule name {}",
                    rule.name
                )));
            }
        }

        policy.rules = request.rules;
        policy.default_action = request.default_action;
        policy.visibility_config = request.visibility_config;
        policy.version += 1;
        Ok(())
    }
}
