//! Configuration file loading for persona-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Explicitly passed config file
//! 2. Project root: `./persona-chat.toml` or `./.persona-chat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/persona-chat/config.toml`
//! 4. Fallback: `~/.config/persona-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAgentConfig, FileChatConfig, FileConfig, FileModelConfig, FilePersonaConfig,
};
pub use loader::ConfigLoader;
