//! WAFv2 policy model
//!
//! Rules read from the service stay SDK values, so rules the reconciliation
//! does not understand go back in the update exactly as they were read.
//! `UpdateWebACL` replaces the whole Web ACL, so the ACL-level settings read
//! with the rules travel along too.

use aws_sdk_wafv2::types::{
    AllowAction, AssociationConfig, BlockAction, CaptchaConfig, ChallengeConfig, CountAction,
    CustomResponseBody, DataProtectionConfig, DefaultAction, NoneAction, OverrideAction, Rule,
    RuleAction, RuleGroupReferenceStatement, Statement, VisibilityConfig, WebAcl,
};
use domain::{DomainError, DomainResult, PolicyModel, PolicyRule, RuleEntry, RuleStatement};
use std::collections::HashMap;

/// A WAFv2 rule as returned by `GetWebACL`
#[derive(Debug, Clone, PartialEq)]
pub struct WafRule(pub Rule);

impl WafRule {
    pub fn into_inner(self) -> Rule {
        self.0
    }
}

impl From<Rule> for WafRule {
    fn from(rule: Rule) -> Self {
        Self(rule)
    }
}

impl PolicyRule for WafRule {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn priority(&self) -> i32 {
        self.0.priority()
    }

    fn rule_group_arn(&self) -> Option<&str> {
        self.0
            .statement()
            .and_then(Statement::rule_group_reference_statement)
            .map(RuleGroupReferenceStatement::arn)
    }
}

/// Web ACL fields outside the rule list that an update must resend
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebAclSettings {
    pub description: Option<String>,
    pub custom_response_bodies: Option<HashMap<String, CustomResponseBody>>,
    pub captcha_config: Option<CaptchaConfig>,
    pub challenge_config: Option<ChallengeConfig>,
    pub token_domains: Option<Vec<String>>,
    pub association_config: Option<AssociationConfig>,
    pub data_protection_config: Option<DataProtectionConfig>,
}

impl WebAclSettings {
    pub fn from_web_acl(web_acl: &WebAcl) -> Self {
        Self {
            description: web_acl.description().map(str::to_string),
            custom_response_bodies: web_acl.custom_response_bodies().cloned(),
            captcha_config: web_acl.captcha_config().cloned(),
            challenge_config: web_acl.challenge_config().cloned(),
            token_domains: web_acl.token_domains.clone(),
            association_config: web_acl.association_config().cloned(),
            data_protection_config: web_acl.data_protection_config().cloned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WafV2Model;

impl PolicyModel for WafV2Model {
    type Rule = WafRule;
    type DefaultAction = DefaultAction;
    type VisibilityConfig = VisibilityConfig;
    type Settings = WebAclSettings;

    fn native_rule(entry: &RuleEntry) -> DomainResult<WafRule> {
        let invalid = |e: aws_sdk_wafv2::error::BuildError| {
            DomainError::invalid_rule(&entry.name, e.to_string())
        };

        let arn = match &entry.statement {
            RuleStatement::RuleGroupReferenceStatement(reference) => &reference.arn,
            _ => {
                return Err(DomainError::invalid_rule(
                    &entry.name,
                    "only rule group reference statements can be created",
                ))
            }
        };

        let statement = Statement::builder()
            .rule_group_reference_statement(
                RuleGroupReferenceStatement::builder()
                    .arn(arn)
                    .build()
                    .map_err(invalid)?,
            )
            .build();

        let visibility_config = VisibilityConfig::builder()
            .sampled_requests_enabled(entry.visibility_config.sampled_requests_enabled)
            .cloud_watch_metrics_enabled(entry.visibility_config.cloud_watch_metrics_enabled)
            .metric_name(&entry.visibility_config.metric_name)
            .build()
            .map_err(invalid)?;

        let rule = Rule::builder()
            .name(&entry.name)
            .priority(entry.priority)
            .statement(statement)
            .set_action(entry.action.map(rule_action))
            .set_override_action(entry.override_action.map(override_action))
            .visibility_config(visibility_config)
            .build()
            .map_err(invalid)?;

        Ok(WafRule(rule))
    }
}

fn rule_action(action: domain::RuleAction) -> RuleAction {
    let builder = RuleAction::builder();
    match action {
        domain::RuleAction::Allow => builder.allow(AllowAction::builder().build()),
        domain::RuleAction::Block => builder.block(BlockAction::builder().build()),
        domain::RuleAction::Count => builder.count(CountAction::builder().build()),
    }
    .build()
}

fn override_action(action: domain::OverrideAction) -> OverrideAction {
    let builder = OverrideAction::builder();
    match action {
        domain::OverrideAction::None => builder.none(NoneAction::builder().build()),
        domain::OverrideAction::Count => builder.count(CountAction::builder().build()),
    }
    .build()
}
