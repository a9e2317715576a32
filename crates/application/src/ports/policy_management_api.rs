//! Policy Management API Port
//!
//! Abstraction over the remote control plane that stores firewall policies.
//! Infrastructure provides the cloud implementation, tests provide an
//! in-memory one.

use async_trait::async_trait;
use domain::{LockToken, PolicyDocument, PolicyModel, PolicySummary, Scope};
use thiserror::Error;

/// Errors from list/get calls
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Service error {code}: {message}")]
    Service { code: String, message: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Closed set of update failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateFailure {
    /// The submitted rule structure failed schema validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lock token no longer matches the policy's current version
    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("Update failed: {0}")]
    Other(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Conditional full replacement of a policy's rule list
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePolicyRequest<M: PolicyModel> {
    pub name: String,
    pub scope: Scope,
    pub id: String,
    /// Token from the read that produced `rules`
    pub lock_token: LockToken,
    pub default_action: M::DefaultAction,
    pub rules: Vec<M::Rule>,
    pub visibility_config: M::VisibilityConfig,
    pub settings: M::Settings,
}

impl<M: PolicyModel> UpdatePolicyRequest<M> {
    /// Request writing `rules` back over `document`, everything else untouched
    pub fn from_document(document: PolicyDocument<M>, scope: Scope, rules: Vec<M::Rule>) -> Self {
        Self {
            name: document.name,
            scope,
            id: document.id,
            lock_token: document.lock_token,
            default_action: document.default_action,
            rules,
            visibility_config: document.visibility_config,
            settings: document.settings,
        }
    }
}

/// Web-ACL management operations the reconciliation depends on
#[async_trait]
pub trait PolicyManagementApi: Send + Sync {
    type Model: PolicyModel;

    /// First page of policy summaries for a scope
    async fn list_policies(&self, scope: Scope, limit: i32) -> ApiResult<Vec<PolicySummary>>;

    /// Full policy document, `None` when the policy does not exist
    async fn get_policy(
        &self,
        name: &str,
        scope: Scope,
        id: &str,
    ) -> ApiResult<Option<PolicyDocument<Self::Model>>>;

    /// Conditional update guarded by `request.lock_token`
    async fn update_policy(
        &self,
        request: UpdatePolicyRequest<Self::Model>,
    ) -> Result<(), UpdateFailure>;
}
