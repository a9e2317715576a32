//! Application Ports
//!
//! Abstractions the infrastructure layer implements (Dependency Inversion).

pub mod policy_management_api;

pub use policy_management_api::*;
