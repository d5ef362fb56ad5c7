//! Configuration value objects for the domain layer
//!
//! These describe problems found in user configuration and are shared by
//! the layers that load and apply it.

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
