//! WAFv2 policy management API
//!
//! Implements [`PolicyManagementApi`] on the AWS SDK. Service error codes
//! are classified into the port's error types here so the application layer
//! never sees SDK errors.

use super::model::{WafRule, WafV2Model, WebAclSettings};
use application::ports::{
    ApiError, ApiResult, PolicyManagementApi, UpdateFailure, UpdatePolicyRequest,
};
use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_wafv2::config::Region;
use aws_sdk_wafv2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_wafv2::operation::update_web_acl::builders::UpdateWebACLFluentBuilder;
use aws_sdk_wafv2::types::WebAclSummary;
use aws_sdk_wafv2::Client;
use domain::config::AwsConfig;
use domain::{LockToken, PolicyDocument, PolicySummary, Scope};
use std::time::Duration;
use tracing::{debug, warn};

const NONEXISTENT_ITEM: &str = "WAFNonexistentItemException";
const INVALID_PARAMETER: &str = "WAFInvalidParameterException";
const OPTIMISTIC_LOCK: &str = "WAFOptimisticLockException";
const ACCESS_DENIED: &str = "AccessDeniedException";

/// Policy API backed by the WAFv2 control plane
#[derive(Clone)]
pub struct WafV2PolicyApi {
    client: Client,
}

impl std::fmt::Debug for WafV2PolicyApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WafV2PolicyApi")
            .field("region", &self.client.config().region())
            .finish()
    }
}

impl WafV2PolicyApi {
    /// Build a client from the SDK default chain plus overrides
    ///
    /// - `region`: used instead of the region resolved by the default chain
    /// - `endpoint_url`: endpoint override (e.g. LocalStack)
    /// - `timeout_ms`: per-operation timeout
    pub async fn from_config(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_wafv2::config::Builder::from(&sdk_config);

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        if let Some(timeout_ms) = config.timeout_ms {
            let timeout_config = TimeoutConfig::builder()
                .operation_timeout(Duration::from_millis(timeout_ms))
                .build();
            builder = builder.timeout_config(timeout_config);
        }

        Self::from_client(Client::from_conf(builder.build()))
    }

    /// Create from a pre-built client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// UpdateWebACL call resending everything that was read with the rules
    fn update_request(&self, request: UpdatePolicyRequest<WafV2Model>) -> UpdateWebACLFluentBuilder {
        let rules = request.rules.into_iter().map(WafRule::into_inner).collect();
        let settings = request.settings;

        self.client
            .update_web_acl()
            .name(request.name)
            .scope(sdk_scope(request.scope))
            .id(request.id)
            .lock_token(request.lock_token.as_str())
            .default_action(request.default_action)
            .set_rules(Some(rules))
            .visibility_config(request.visibility_config)
            .set_description(settings.description)
            .set_custom_response_bodies(settings.custom_response_bodies)
            .set_captcha_config(settings.captcha_config)
            .set_challenge_config(settings.challenge_config)
            .set_token_domains(settings.token_domains)
            .set_association_config(settings.association_config)
            .set_data_protection_config(settings.data_protection_config)
    }
}

fn sdk_scope(scope: Scope) -> aws_sdk_wafv2::types::Scope {
    match scope {
        Scope::Regional => aws_sdk_wafv2::types::Scope::Regional,
        Scope::Cloudfront => aws_sdk_wafv2::types::Scope::Cloudfront,
    }
}

fn summary_from_sdk(summary: &WebAclSummary, scope: Scope) -> PolicySummary {
    // an entry without ARN is kept so it shows up as a failed policy
    let mut result = PolicySummary::new(summary.arn().unwrap_or_default(), scope);
    if let Some(name) = summary.name() {
        result = result.with_name(name);
    }
    if let Some(token) = summary.lock_token() {
        result = result.with_lock_token(token);
    }
    result
}

/// Map a list/get failure to the port error
fn api_error<E, R>(err: SdkError<E, R>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    match &err {
        SdkError::ServiceError(service) => match service.err().code() {
            Some(ACCESS_DENIED) => ApiError::AccessDenied(message),
            Some(code) => ApiError::Service {
                code: code.to_string(),
                message,
            },
            None => ApiError::InvalidResponse(message),
        },
        SdkError::ResponseError(_) => ApiError::InvalidResponse(message),
        _ => ApiError::Transport(message),
    }
}

/// Classify an UpdateWebACL failure by service error code
pub(crate) fn update_failure(code: Option<&str>, message: String) -> UpdateFailure {
    match code {
        Some(INVALID_PARAMETER) => UpdateFailure::Validation(message),
        Some(OPTIMISTIC_LOCK) => UpdateFailure::ConcurrencyConflict(message),
        _ => UpdateFailure::Other(message),
    }
}

#[async_trait]
impl PolicyManagementApi for WafV2PolicyApi {
    type Model = WafV2Model;

    async fn list_policies(&self, scope: Scope, limit: i32) -> ApiResult<Vec<PolicySummary>> {
        let output = self
            .client
            .list_web_acls()
            .scope(sdk_scope(scope))
            .limit(limit)
            .send()
            .await
            .map_err(api_error)?;

        if output.next_marker().is_some() {
            warn!(
                limit,
                "More policies exist than fit in one page, only the first page is processed"
            );
        }

        Ok(output
            .web_acls()
            .iter()
            .map(|summary| summary_from_sdk(summary, scope))
            .collect())
    }

    async fn get_policy(
        &self,
        name: &str,
        scope: Scope,
        id: &str,
    ) -> ApiResult<Option<PolicyDocument<WafV2Model>>> {
        let result = self
            .client
            .get_web_acl()
            .name(name)
            .scope(sdk_scope(scope))
            .id(id)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) if err.as_service_error().and_then(|e| e.code()) == Some(NONEXISTENT_ITEM) => {
                debug!(policy = name, "GetWebACL reported no such policy");
                return Ok(None);
            }
            Err(err) => return Err(api_error(err)),
        };

        let Some(web_acl) = output.web_acl() else {
            return Ok(None);
        };

        let lock_token = output
            .lock_token()
            .ok_or_else(|| ApiError::InvalidResponse(format!("{name}: response has no lock token")))?;
        let default_action = web_acl
            .default_action()
            .cloned()
            .ok_or_else(|| ApiError::InvalidResponse(format!("{name}: policy has no default action")))?;
        let visibility_config = web_acl.visibility_config().cloned().ok_or_else(|| {
            ApiError::InvalidResponse(format!("{name}: policy has no visibility config"))
        })?;

        Ok(Some(PolicyDocument {
            name: name.to_string(),
            id: id.to_string(),
            lock_token: LockToken::new(lock_token),
            default_action,
            visibility_config,
            settings: WebAclSettings::from_web_acl(web_acl),
            rules: web_acl.rules().iter().cloned().map(WafRule).collect(),
        }))
    }

    async fn update_policy(
        &self,
        request: UpdatePolicyRequest<WafV2Model>,
    ) -> Result<(), UpdateFailure> {
        self.update_request(request)
            .send()
            .await
            .map(|_| ())
            .map_err(|err| {
                let code = err.as_service_error().and_then(|e| e.code());
                update_failure(code, DisplayErrorContext(&err).to_string())
            })
    }
}
