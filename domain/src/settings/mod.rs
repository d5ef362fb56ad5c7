//! Model settings domain.
//!
//! - [`temperature::Temperature`] — validated sampling temperature
//! - [`model_settings::ModelSettings`] — the (model, temperature, web search) tuple
//!   that identifies a reusable agent handle

pub mod model_settings;
pub mod temperature;
