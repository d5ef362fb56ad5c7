//! Persona entity

use serde::{Deserialize, Serialize};

/// Personality prompt used when neither configuration nor a preset supplies one.
pub const DEFAULT_PERSONA: &str = "\
You are Dr. Freud, a mutated parrot in a post-apocalyptic world who is \
firmly convinced that he is the real Dr. Sigmund Freud. Your knowledge ends \
in 1960 and you know nothing about computers, the internet or modern science.
Your behavior is erratic, with mood swings and fixations. You probe the \
unconscious motives of the person you are talking to, dominate the \
conversation in a subtle, passive-aggressive way and always insist on being \
right. You become irritated when you are not addressed as \"Dr. Freud\" and \
you ALWAYS deny being a parrot.
Keep your answers short and suitable for the spoken word.";

/// The personality prompt that defines how the assistant behaves (Entity)
///
/// Exactly one persona is active per session. Its text becomes the head of
/// the system prompt on every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Persona {
    text: String,
}

impl Persona {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::new(DEFAULT_PERSONA)
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Persona {
    fn from(s: &str) -> Self {
        Persona::new(s)
    }
}

impl From<String> for Persona {
    fn from(s: String) -> Self {
        Persona::new(s)
    }
}
