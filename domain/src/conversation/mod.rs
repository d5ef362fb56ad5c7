//! Conversation domain.
//!
//! - [`entities::Turn`] — one chronological exchange entry (user or assistant)
//! - [`entities::ConversationLog`] — the append-only turn list of a session
//! - [`transcript::Transcript`] — lazy textual rendering of a log

pub mod entities;
pub mod transcript;
