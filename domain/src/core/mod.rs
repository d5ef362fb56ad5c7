//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`] — identifier of a hosted chat model
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
