//! Infrastructure layer for persona-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod presets;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAgentConfig, FileChatConfig, FileConfig, FileModelConfig,
    FilePersonaConfig,
};
pub use logging::JsonlConversationLogger;
pub use presets::FilePresetStore;
