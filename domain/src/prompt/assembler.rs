//! System prompt assembly for a single chat turn

/// Separator placed between the persona and the transcript
pub const HISTORY_HEADER: &str = "\n\nPrevious conversation:\n";

/// Builds the system prompt sent with every turn
///
/// The underlying model is stateless between calls, so the whole transcript
/// travels with each request. The result must be rebuilt on every turn.
pub struct PromptAssembler;

impl PromptAssembler {
    /// Combine the persona with the serialized transcript
    ///
    /// An empty transcript yields the persona unchanged.
    pub fn assemble(persona: &str, transcript: &str) -> String {
        if transcript.is_empty() {
            return persona.to_string();
        }

        let mut prompt =
            String::with_capacity(persona.len() + HISTORY_HEADER.len() + transcript.len());
        prompt.push_str(persona);
        prompt.push_str(HISTORY_HEADER);
        prompt.push_str(transcript);
        prompt
    }
}
