//! Agent lifecycle cache
//!
//! - [`AgentCache`] — memoizes model handles per [`ModelSettings`](persona_domain::ModelSettings)
//! - [`AgentHandle`] — a built client plus the settings it was built for

mod agent_cache;
mod handle;

pub use agent_cache::{AgentCache, CacheEntryState, ConstructionError};
pub use handle::AgentHandle;
