use crate::mood::{Mood, UnknownMood};

/// Prefix of the mood override command, matched case-insensitively.
pub const CORRECT_PREFIX: &str = "correct:";

/// An inbound message, interpreted ahead of mood detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Rewrite the memory file as-is.
    Save,
    /// Clear the recent mood memory.
    Reset,
    /// Ask how to get an explanation.
    Why,
    /// `correct: <mood>` with a valid mood.
    Correct(Mood),
    /// `correct: <mood>` naming something outside the five categories.
    Reject(UnknownMood),
    /// Free text to classify (trimmed).
    Message(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(text: &'a str) -> Self {
        let text = text.trim();
        let lower = text.to_lowercase();

        match lower.as_str() {
            "save" => return Command::Save,
            "reset" => return Command::Reset,
            "why" => return Command::Why,
            _ => {}
        }

        let prefix_len = CORRECT_PREFIX.len();
        if text
            .get(..prefix_len)
            .is_some_and(|p| p.eq_ignore_ascii_case(CORRECT_PREFIX))
        {
            let requested = &text[prefix_len..];
            return match requested.parse::<Mood>() {
                Ok(mood) => Command::Correct(mood),
                Err(unknown) => Command::Reject(unknown),
            };
        }

        Command::Message(text)
    }

    /// Free text that asks for reasoning inline gets the explanation too.
    pub fn wants_explanation(&self) -> bool {
        matches!(self, Command::Message(text) if text.to_lowercase().contains("why"))
    }
}
