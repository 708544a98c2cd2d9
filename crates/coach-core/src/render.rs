//! Outbound message formatting (Markdown).

use crate::classify::Classification;
use crate::memory::MemoryState;
use crate::mood::{Mood, UnknownMood};
use crate::time::unix_to_iso8601;

pub const SAVED: &str = "Memory saved to disk.";
pub const RESET: &str = "Cleared recent mood memory.";
pub const WHY_HINT: &str = "Send a sentence describing how you feel \
     (e.g., 'I'm overwhelmed and anxious') and include the word \"why\" \
     to get my reasoning along with the reply.";

pub fn welcome() -> String {
    format!(
        "**Mood Coach**\n\n\
         Tell me how you're feeling (e.g., *tired, stressed, happy*) and I'll suggest \
         a few quick, helpful actions.\n\n\
         **Commands**\n\
         • `why` → how to see my reasoning\n\
         • `correct: <mood>` → override the last mood (moods: {})\n\
         • `reset` → clear recent mood memory\n\
         • `save` → save memory to disk\n",
        Mood::valid_names()
    )
}

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn suggestions_and_quote(tips: &[&str], quote: &str) -> String {
    format!(
        "**Suggestions:**\n{}\n\n**Quote:** _{quote}_",
        bullets(tips)
    )
}

/// Reply to a classified free-text message.
pub fn mood_reply(result: &Classification, tips: &[&str], quote: &str) -> String {
    format!(
        "**Detected mood:** **{}**  \n\
         **Sentiment (compound):** {:.2}\n\n\
         {}\n\n\
         Type `why` if you want my reasoning, or `correct: <mood>` to override.",
        result.mood,
        result.compound,
        suggestions_and_quote(tips, quote)
    )
}

/// Reply to an accepted `correct:` override.
pub fn correction_reply(mood: Mood, tips: &[&str], quote: &str) -> String {
    format!(
        "Thanks — updated mood to **{mood}**.\n\n{}",
        suggestions_and_quote(tips, quote)
    )
}

/// Reply to a `correct:` naming an unknown mood.
pub fn rejection(unknown: &UnknownMood) -> String {
    format!(
        "Unknown mood `{}`. Use one of: {}",
        unknown.0,
        Mood::valid_names()
    )
}

/// Reasons and score snapshot for a classification.
pub fn explanation(result: &Classification) -> String {
    let snapshot = result
        .scores
        .iter()
        .map(|(mood, score)| format!("{mood}={score:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "**Why I chose this mood**\n{}\n\n**Score snapshot:** {snapshot}",
        bullets(result.reasons.as_slice())
    )
}

/// One line per stored record, oldest first.
pub fn history(state: &MemoryState) -> String {
    if state.is_empty() {
        return "(no recent moods)".to_string();
    }
    state
        .records()
        .map(|r| format!("{}  {}", unix_to_iso8601(r.ts), r.mood))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ScoreVector;

    fn sample() -> Classification {
        let mut scores = ScoreVector::default();
        scores.add(Mood::Stressed, 0.6);
        scores.add(Mood::Neutral, 0.2);
        Classification {
            mood: Mood::Stressed,
            compound: 0.0,
            reasons: vec![
                "keywords for **stressed**: pressure".to_string(),
                "neutral sentiment (compound=0.00) → **neutral**".to_string(),
            ],
            scores,
        }
    }

    #[test]
    fn test_mood_reply_layout() {
        let reply = mood_reply(&sample(), &["a", "b"], "Rest is part of the process.");
        assert!(reply.starts_with("**Detected mood:** **stressed**"));
        assert!(reply.contains("**Sentiment (compound):** 0.00"));
        assert!(reply.contains("**Suggestions:**\n- a\n- b\n"));
        assert!(reply.contains("**Quote:** _Rest is part of the process._"));
        assert!(reply.ends_with("`correct: <mood>` to override."));
    }

    #[test]
    fn test_explanation_snapshot_order() {
        let text = explanation(&sample());
        assert!(text.starts_with("**Why I chose this mood**\n- keywords for **stressed**"));
        assert!(text.ends_with(
            "**Score snapshot:** stressed=0.60, tired=0.00, sad=0.00, happy=0.00, neutral=0.20"
        ));
    }

    #[test]
    fn test_rejection_lists_moods() {
        let text = rejection(&UnknownMood("excited".to_string()));
        assert_eq!(
            text,
            "Unknown mood `excited`. Use one of: stressed, tired, sad, happy, neutral"
        );
    }

    #[test]
    fn test_correction_reply() {
        let text = correction_reply(Mood::Tired, &["x"], "q");
        assert!(text.starts_with("Thanks — updated mood to **tired**."));
        assert!(text.contains("- x"));
    }

    #[test]
    fn test_history() {
        assert_eq!(history(&MemoryState::new()), "(no recent moods)");
        let mut state = MemoryState::new();
        state.remember(Mood::Sad, 0);
        state.remember(Mood::Happy, 60);
        assert_eq!(
            history(&state),
            "1970-01-01T00:00:00Z  sad\n1970-01-01T00:01:00Z  happy"
        );
    }

    #[test]
    fn test_welcome_mentions_commands() {
        let text = welcome();
        for cmd in ["`why`", "`correct: <mood>`", "`reset`", "`save`"] {
            assert!(text.contains(cmd), "welcome missing {cmd}");
        }
    }
}
