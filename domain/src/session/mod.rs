//! Chat session domain.
//!
//! - [`state::SessionState`] — everything one user session owns: settings,
//!   active persona, editor buffer and conversation log

pub mod state;
