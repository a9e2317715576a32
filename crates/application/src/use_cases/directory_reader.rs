//! Policy Directory Reader
//!
//! Lists the policies of a scope. Only the first page is requested; an
//! empty page is a normal outcome.

use crate::errors::{ApplicationError, ApplicationResult};
use crate::ports::PolicyManagementApi;
use domain::{PolicySummary, Scope};
use std::sync::Arc;
use tracing::{debug, error};

pub struct PolicyDirectoryReader<A: PolicyManagementApi> {
    api: Arc<A>,
}

impl<A: PolicyManagementApi> PolicyDirectoryReader<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Summaries of the policies in `scope`, at most `page_size` entries
    pub async fn list(&self, scope: Scope, page_size: i32) -> ApplicationResult<Vec<PolicySummary>> {
        match self.api.list_policies(scope, page_size).await {
            Ok(summaries) => {
                debug!(scope = %scope, count = summaries.len(), "Listed policies");
                Ok(summaries)
            }
            Err(source) => {
                error!(scope = %scope, error = %source, "Policy listing failed");
                Err(ApplicationError::DirectoryUnavailable { source })
            }
        }
    }
}
