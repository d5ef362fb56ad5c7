//! Application-level configuration.
//!
//! - [`ChatParams`] — agent cache lifetime, reply length and fallback text

pub mod chat_params;

pub use chat_params::{ChatParams, DEFAULT_FALLBACK_REPLY};
