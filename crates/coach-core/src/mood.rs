use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five fixed mood categories.
///
/// Declaration order matters: it is the iteration order of score vectors
/// and the tie-break order when two moods score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Stressed,
    Tired,
    Sad,
    Happy,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Stressed,
        Mood::Tired,
        Mood::Sad,
        Mood::Happy,
        Mood::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Sad => "sad",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
        }
    }

    /// Position in declaration order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Comma-separated list of every mood name, e.g. for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mood name outside the five fixed categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mood '{}'", self.0)
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or(UnknownMood(normalized))
    }
}
