//! Mood classification: keyword hits + sentiment rule + recency penalty.
//!
//! ```text
//! score(m) = 0.6·[any keyword of m in text]
//!          + sentiment_rule(compound)[m]
//!          + recency_penalty(m)
//! mood     = argmax score, ties → declaration order
//! ```

use crate::constants::{
    KEYWORD_WEIGHT, MILD_NEGATIVE, MILD_POSITIVE, MILD_SENTIMENT_WEIGHT, STRONG_NEGATIVE,
    STRONG_POSITIVE, STRONG_SENTIMENT_WEIGHT,
};
use crate::lexicon::keyword_hits;
use crate::memory::MemoryState;
use crate::mood::Mood;
use crate::sentiment::{VaderScorer, SentimentScorer};

/// Per-mood scores for one classification, indexed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector([f64; 5]);

impl ScoreVector {
    pub fn get(&self, mood: Mood) -> f64 {
        self.0[mood.index()]
    }

    pub fn add(&mut self, mood: Mood, delta: f64) {
        self.0[mood.index()] += delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mood, f64)> + '_ {
        Mood::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    /// Highest-scoring mood. Only a strictly greater score displaces an
    /// earlier mood, so ties resolve to declaration order.
    pub fn argmax(&self) -> Mood {
        let mut best = Mood::ALL[0];
        for (mood, score) in self.iter() {
            if score > self.get(best) {
                best = mood;
            }
        }
        best
    }
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub mood: Mood,
    /// Compound sentiment of the lowercased input, in [-1, 1].
    pub compound: f64,
    /// Human-readable reasons, in the order the signals were applied.
    pub reasons: Vec<String>,
    pub scores: ScoreVector,
}

/// Which mood a compound score votes for, with what weight and label.
/// Exactly one rule fires; thresholds are checked from the top down.
pub fn sentiment_rule(compound: f64) -> (Mood, f64, &'static str) {
    if compound >= STRONG_POSITIVE {
        (Mood::Happy, STRONG_SENTIMENT_WEIGHT, "positive sentiment")
    } else if compound >= MILD_POSITIVE {
        (Mood::Happy, MILD_SENTIMENT_WEIGHT, "slightly positive sentiment")
    } else if compound <= STRONG_NEGATIVE {
        (Mood::Sad, STRONG_SENTIMENT_WEIGHT, "negative sentiment")
    } else if compound <= MILD_NEGATIVE {
        (Mood::Stressed, MILD_SENTIMENT_WEIGHT, "slightly negative sentiment")
    } else {
        (Mood::Neutral, MILD_SENTIMENT_WEIGHT, "neutral sentiment")
    }
}

pub struct MoodClassifier<S = VaderScorer> {
    scorer: S,
}

impl Default for MoodClassifier<VaderScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodClassifier<VaderScorer> {
    pub fn new() -> Self {
        Self {
            scorer: VaderScorer::new(),
        }
    }
}

impl<S: SentimentScorer> MoodClassifier<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify `text` against a memory snapshot taken at `now` (Unix secs).
    /// Pure: the caller decides whether to remember the result.
    pub fn classify(&self, text: &str, memory: &MemoryState, now: u64) -> Classification {
        let text_l = text.to_lowercase();
        let mut scores = ScoreVector::default();
        let mut reasons = Vec::new();

        for mood in Mood::ALL {
            let hits = keyword_hits(&text_l, mood);
            if !hits.is_empty() {
                scores.add(mood, KEYWORD_WEIGHT);
                reasons.push(format!("keywords for **{mood}**: {}", hits.join(", ")));
            }
        }

        let compound = self.scorer.compound(&text_l);
        let (voted, weight, label) = sentiment_rule(compound);
        scores.add(voted, weight);
        reasons.push(format!("{label} (compound={compound:.2}) → **{voted}**"));

        for mood in Mood::ALL {
            let adj = memory.recency_penalty(mood, now);
            scores.add(mood, adj);
            if adj < 0.0 {
                reasons.push(format!("recently seen **{mood}** → applying penalty"));
            }
        }

        Classification {
            mood: scores.argmax(),
            compound,
            reasons,
            scores,
        }
    }
}
