//! WAFv2 adapter for the policy management port

pub mod client;
pub mod model;

pub use client::WafV2PolicyApi;
pub use model::{WafRule, WafV2Model, WebAclSettings};
