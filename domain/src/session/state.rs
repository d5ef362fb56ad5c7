//! Per-session chat state

use crate::conversation::entities::{ConversationLog, Role};
use crate::persona::entities::Persona;
use crate::settings::model_settings::ModelSettings;

/// State owned by exactly one user session (Entity)
///
/// | Field      | Meaning                                              |
/// |------------|------------------------------------------------------|
/// | `settings` | model, temperature and web search for the next turn  |
/// | `persona`  | the applied personality prompt                       |
/// | `editor`   | draft persona text, applied only on request          |
/// | `log`      | conversation since the persona was last changed      |
///
/// Nothing in here is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    settings: ModelSettings,
    persona: Persona,
    editor: String,
    log: ConversationLog,
}

impl SessionState {
    pub fn new(settings: ModelSettings, persona: Persona) -> Self {
        let editor = persona.text().to_string();
        Self {
            settings,
            persona,
            editor,
            log: ConversationLog::new(),
        }
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Replace the model settings; the conversation is kept
    pub fn update_settings(&mut self, settings: ModelSettings) {
        self.settings = settings;
    }

    pub fn set_editor(&mut self, text: impl Into<String>) {
        self.editor = text.into();
    }

    /// Apply a new persona text
    ///
    /// Returns `true` when the text differs from the active persona, in which
    /// case the conversation log is cleared. Identical text is a no-op.
    pub fn replace_persona(&mut self, text: &str) -> bool {
        if self.persona.text() == text {
            return false;
        }
        self.persona = Persona::new(text);
        self.log.clear();
        true
    }

    /// Append a user message together with the reply it produced
    ///
    /// Both turns are appended in one step so the log never holds a user
    /// turn without its answer.
    pub fn record_exchange(&mut self, user_text: impl Into<String>, reply: impl Into<String>) {
        self.log.append(Role::User, user_text);
        self.log.append(Role::Assistant, reply);
    }

    /// Empty the log, keeping persona, settings and editor
    pub fn clear_conversation(&mut self) {
        self.log.clear();
    }
}
