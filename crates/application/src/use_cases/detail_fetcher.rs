//! Policy Detail Fetcher
//!
//! Turns a listing entry into the full policy document plus the lock token
//! needed for the conditional write.

use crate::errors::DetailFetchError;
use crate::ports::PolicyManagementApi;
use domain::{PolicyDocument, PolicySummary, ResourceArn};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct PolicyDetailFetcher<A: PolicyManagementApi> {
    api: Arc<A>,
}

impl<A: PolicyManagementApi> PolicyDetailFetcher<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch the document behind `summary`.
    ///
    /// The name and id come from the last two `/` segments of the policy ARN.
    /// `Ok(None)` means the policy disappeared after it was listed.
    pub async fn fetch(
        &self,
        summary: &PolicySummary,
    ) -> Result<Option<PolicyDocument<A::Model>>, DetailFetchError> {
        let arn = ResourceArn::parse(&summary.arn).inspect_err(|e| {
            warn!(policy_arn = %summary.arn, error = %e, "Cannot derive policy identity");
        })?;

        let document = self
            .api
            .get_policy(arn.name(), summary.scope, arn.id())
            .await?;

        match &document {
            Some(doc) => debug!(
                policy = %doc.name,
                rules = doc.rule_count(),
                lock_token = %doc.lock_token,
                "Fetched policy"
            ),
            None => warn!(policy = %arn.name(), "Policy no longer exists"),
        }

        Ok(document)
    }
}
