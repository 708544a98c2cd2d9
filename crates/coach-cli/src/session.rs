use coach_core::time::now_unix_secs;
use coach_core::{Command, Mood, MoodClassifier, pick_quote, render, suggestions_for};
use coach_store::{CoachStore, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// One coach bound to a store: turns an inbound message into replies.
///
/// Memory is reloaded from disk for every message; the only state held
/// here is the random source.
pub struct Coach<R = SmallRng> {
    store: CoachStore,
    classifier: MoodClassifier,
    rng: R,
}

impl Coach<SmallRng> {
    pub fn new(store: CoachStore) -> Self {
        Self::with_rng(store, SmallRng::from_os_rng())
    }
}

impl<R: Rng> Coach<R> {
    pub fn with_rng(store: CoachStore, rng: R) -> Self {
        Self {
            store,
            classifier: MoodClassifier::new(),
            rng,
        }
    }

    pub fn store(&self) -> &CoachStore {
        &self.store
    }

    /// Handle one inbound message. Returns one reply, or two when free text
    /// asks "why" inline (reply first, explanation second).
    pub fn handle(&mut self, text: &str) -> Result<Vec<String>> {
        let memory = self.store.memory();
        let replies = match Command::parse(text) {
            Command::Save => {
                let state = memory.flush()?;
                tracing::info!("saved {} records", state.len());
                vec![render::SAVED.to_string()]
            }
            Command::Reset => {
                memory.reset()?;
                tracing::info!("memory reset");
                vec![render::RESET.to_string()]
            }
            Command::Why => vec![render::WHY_HINT.to_string()],
            Command::Reject(unknown) => {
                tracing::debug!("rejected correction: {unknown}");
                vec![render::rejection(&unknown)]
            }
            Command::Correct(mood) => {
                memory.append(mood)?;
                tracing::info!("mood corrected to {mood}");
                let (tips, quote) = self.suggest(mood);
                vec![render::correction_reply(mood, &tips, &quote)]
            }
            command @ Command::Message(msg) => {
                let snapshot = memory.load();
                let result = self.classifier.classify(msg, &snapshot, now_unix_secs());
                memory.append(result.mood)?;
                tracing::debug!(
                    "classified as {} (compound={:.2})",
                    result.mood,
                    result.compound
                );

                let (tips, quote) = self.suggest(result.mood);
                let mut replies = vec![render::mood_reply(&result, &tips, &quote)];
                if command.wants_explanation() {
                    replies.push(render::explanation(&result));
                }
                replies
            }
        };
        Ok(replies)
    }

    fn suggest(&mut self, mood: Mood) -> (Vec<&'static str>, String) {
        let tips = suggestions_for(mood, self.store.config().suggestions, &mut self.rng);
        let external = self.store.quotes().load();
        let quote = pick_quote(external.as_deref(), &mut self.rng);
        (tips, quote)
    }
}
