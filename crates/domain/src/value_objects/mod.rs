//! Domain Value Objects - Immutable domain concepts
//!
//! Value objects represent identifiers and namespaces without identity of
//! their own. Immutable by definition.

pub mod lock_token;
pub mod resource_arn;
pub mod scope;

pub use lock_token::LockToken;
pub use resource_arn::ResourceArn;
pub use scope::Scope;
