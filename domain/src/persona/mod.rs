//! Persona domain.
//!
//! - [`entities::Persona`] — the active personality prompt of a session
//! - [`preset::Preset`] — a named, persisted snapshot of a persona

pub mod entities;
pub mod preset;
