//! Data Transfer Objects returned by the use cases

pub mod outcome;

pub use outcome::*;
