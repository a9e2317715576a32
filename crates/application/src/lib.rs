//! # Application Layer
//!
//! Workflows that apply a rule group across every policy of a scope.
//!
//! - Use Cases: directory reader, detail fetcher, reconciler, orchestrator
//! - DTOs: per-policy outcomes and the run report
//! - Ports: the policy management API the infrastructure layer implements
//!
//! ## Dependency Direction
//!
//! ```text
//! Application Layer -> Domain Layer (entities, services)
//! Infrastructure -> Application Layer (implements ports)
//! ```

pub mod dtos;
pub mod errors;
pub mod ports;
pub mod use_cases;

pub use dtos::{
    ExecutionReport, FailureKind, OutcomeStatus, PolicyOutcome, ReportSummary, RunStatus,
};
pub use errors::{ApplicationError, ApplicationResult, DetailFetchError};
pub use ports::{ApiError, ApiResult, PolicyManagementApi, UpdateFailure, UpdatePolicyRequest};
pub use use_cases::{
    ExecutionOptions, PolicyDetailFetcher, PolicyDirectoryReader, Reconciler,
    RuleGroupOrchestrator, RuleGroupTarget,
};
