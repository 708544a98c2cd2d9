//! Compound sentiment scoring.
//!
//! The default scorer is VADER (`vader_sentiment`): a ~7,500-word valence
//! lexicon with booster, negation, contrastive "but" and punctuation
//! emphasis rules, normalized into [-1, 1].

use vader_sentiment::SentimentIntensityAnalyzer;

/// Produces a compound polarity score for a piece of text.
pub trait SentimentScorer {
    /// Compound polarity of `text`, always within [-1, 1].
    fn compound(&self, text: &str) -> f64;
}

/// VADER compound polarity.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
