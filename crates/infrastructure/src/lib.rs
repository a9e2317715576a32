//! Infrastructure Layer
//!
//! - config: file and environment configuration loading, validation
//! - waf: the WAFv2 implementation of the policy management port

pub mod config;
pub mod waf;

pub use config::{ConfigLoader, ConfigSource, ConfigValidator};
pub use waf::{WafRule, WafV2Model, WafV2PolicyApi, WebAclSettings};
