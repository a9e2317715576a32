//! Use Cases
//!
//! One struct per step of the reconciliation, composed by the orchestrator.

pub mod apply_rule_group;
pub mod detail_fetcher;
pub mod directory_reader;
pub mod reconciler;

pub use apply_rule_group::{ExecutionOptions, RuleGroupOrchestrator};
pub use detail_fetcher::PolicyDetailFetcher;
pub use directory_reader::PolicyDirectoryReader;
pub use reconciler::{Reconciler, RuleGroupTarget};
