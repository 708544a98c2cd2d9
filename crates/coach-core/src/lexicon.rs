//! Static mood lexicon: detection keywords, coping suggestions, fallback quotes.

use crate::mood::Mood;

/// Built-in quotes used when no external quotes list is available.
pub const DEFAULT_QUOTES: [&str; 5] = [
    "Small steps every day lead to big changes.",
    "You don’t have to be extreme, just consistent.",
    "Action cures fear — start tiny.",
    "Your future is decided by what you do today, not tomorrow.",
    "Rest is part of the process.",
];

/// Detection keywords for a mood. Neutral has none; it is reached through
/// sentiment alone.
pub fn keywords(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Stressed => &["overwhelmed", "anxious", "stress", "pressure", "panic"],
        Mood::Tired => &["sleepy", "exhausted", "fatigue", "drained", "tired"],
        Mood::Sad => &["down", "blue", "depressed", "lonely", "sad"],
        Mood::Happy => &["great", "excited", "joy", "grateful", "happy"],
        Mood::Neutral => &[],
    }
}

/// Coping suggestions for a mood.
pub fn suggestions(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Stressed => &[
            "2-minute box breathing: inhale 4s, hold 4s, exhale 4s, hold 4s.",
            "Write down 3 worries, then one tiny action for each.",
            "Stretch your neck and shoulders for 60 seconds.",
        ],
        Mood::Tired => &[
            "Stand up, sip water, and do 10 slow squats.",
            "2-minute sunlight break at a window/balcony.",
            "Swap tasks: do a 5-minute easy win to regain momentum.",
        ],
        Mood::Sad => &[
            "Text a friend one nice thing.",
            "Play a comforting song and breathe for a minute.",
            "Step outside for 3 minutes and name 5 things you see.",
        ],
        Mood::Happy => &[
            "Bank the energy: tackle a 10-minute task you've delayed.",
            "Share gratitude: write 2 lines to someone you appreciate.",
            "Queue a playlist and do a focused 15-minute sprint.",
        ],
        Mood::Neutral => &[
            "Pick one 10-minute task and set a timer.",
            "Tidy your workspace for 3 minutes.",
            "Drink water and plan your next 30 minutes.",
        ],
    }
}

/// Keywords of `mood` that occur as substrings of already-lowercased text,
/// in lexicon order.
pub fn keyword_hits(text_lower: &str, mood: Mood) -> Vec<&'static str> {
    keywords(mood)
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(kw))
        .collect()
}
