//! Textual rendering of a conversation log

use super::entities::Turn;
use std::fmt;

/// Lazy view over a slice of turns
///
/// Nothing is rendered until the transcript is formatted or its lines are
/// iterated. The view is `Copy`, so it can be walked any number of times.
#[derive(Debug, Clone, Copy)]
pub struct Transcript<'a> {
    turns: &'a [Turn],
}

impl<'a> Transcript<'a> {
    pub fn new(turns: &'a [Turn]) -> Self {
        Self { turns }
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// One `"<Role>: <text>"` line per turn, oldest first
    pub fn lines(self) -> impl Iterator<Item = String> + 'a {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.role.label(), turn.text))
    }
}

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, turn) in self.turns.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", turn.role.label(), turn.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_can_be_walked_twice() {
        let turns = vec![Turn::user("Hi"), Turn::assistant("Well?")];
        let transcript = Transcript::new(&turns);

        let first: Vec<String> = transcript.lines().collect();
        let second: Vec<String> = transcript.lines().collect();
        assert_eq!(first, vec!["User: Hi", "Assistant: Well?"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_matches_joined_lines() {
        let turns = vec![
            Turn::user("one"),
            Turn::assistant("two"),
            Turn::user("three"),
        ];
        let transcript = Transcript::new(&turns);
        let joined = transcript.lines().collect::<Vec<_>>().join("\n");
        assert_eq!(transcript.to_string(), joined);
    }

    #[test]
    fn test_multiline_text_is_kept_verbatim() {
        let turns = vec![Turn::assistant("line one\nline two")];
        assert_eq!(
            Transcript::new(&turns).to_string(),
            "Assistant: line one\nline two"
        );
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new(&[]);
        assert!(transcript.is_empty());
        assert_eq!(transcript.to_string(), "");
        assert_eq!(transcript.lines().count(), 0);
    }
}
