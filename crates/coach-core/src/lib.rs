//! Mood coach engine.
//!
//! Classifies free-text check-ins into one of five moods by combining
//! keyword hits, a VADER compound sentiment score, and a recency
//! penalty drawn from a short FIFO memory of past moods. Picks coping
//! suggestions and a quote for the detected mood.
//!
//! Zero I/O. Persistence and transport live in `coach-store` and `coach-cli`.

pub mod classify;
pub mod command;
pub mod constants;
pub mod lexicon;
pub mod memory;
pub mod mood;
pub mod render;
pub mod select;
pub mod sentiment;
pub mod serde_compat;
pub mod time;

pub use classify::{Classification, MoodClassifier, ScoreVector};
pub use command::Command;
pub use constants::{DEFAULT_SUGGESTIONS, MEMORY_CAPACITY, RECENCY_PENALTY, RECENCY_WINDOW_SECS};
pub use memory::{MemoryState, MoodRecord};
pub use mood::{Mood, UnknownMood};
pub use select::{pick_quote, suggestions_for};
pub use sentiment::{SentimentScorer, VaderScorer};
pub use serde_compat::{export_json, import_json};
