use std::collections::VecDeque;

use crate::constants::{MEMORY_CAPACITY, RECENCY_PENALTY, RECENCY_WINDOW_SECS};
use crate::mood::Mood;
use crate::time::now_unix_secs;

/// A mood observed at a UTC instant (Unix seconds). Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodRecord {
    pub mood: Mood,
    pub ts: u64,
}

impl MoodRecord {
    pub fn new(mood: Mood, ts: u64) -> Self {
        Self { mood, ts }
    }

    /// Record `mood` at the current UTC time.
    pub fn now(mood: Mood) -> Self {
        Self::new(mood, now_unix_secs())
    }
}

/// Bounded recent-mood history, oldest first.
///
/// Holds at most [`MEMORY_CAPACITY`] records; pushing past capacity evicts
/// from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryState {
    records: VecDeque<MoodRecord>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoodRecord) {
        self.records.push_back(record);
        while self.records.len() > MEMORY_CAPACITY {
            self.records.pop_front();
        }
    }

    pub fn remember(&mut self, mood: Mood, ts: u64) {
        self.push(MoodRecord::new(mood, ts));
    }

    pub fn records(&self) -> impl DoubleEndedIterator<Item = &MoodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&MoodRecord> {
        self.records.back()
    }

    /// Timestamp of the most recent record for `mood`.
    pub fn last_seen(&self, mood: Mood) -> Option<u64> {
        self.records
            .iter()
            .rev()
            .find(|r| r.mood == mood)
            .map(|r| r.ts)
    }

    /// [`RECENCY_PENALTY`] if `mood` was last recorded less than an hour
    /// before `now`, otherwise 0.0. Only the latest occurrence counts.
    /// Future-dated records count as recent.
    pub fn recency_penalty(&self, mood: Mood, now: u64) -> f64 {
        match self.last_seen(mood) {
            Some(ts) if now.saturating_sub(ts) < RECENCY_WINDOW_SECS => RECENCY_PENALTY,
            _ => 0.0,
        }
    }
}

impl FromIterator<MoodRecord> for MemoryState {
    fn from_iter<I: IntoIterator<Item = MoodRecord>>(iter: I) -> Self {
        let mut state = Self::new();
        for record in iter {
            state.push(record);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_771_632_000;

    #[test]
    fn test_push_evicts_oldest() {
        let mut state = MemoryState::new();
        for i in 0..11 {
            state.remember(Mood::Neutral, T0 + i);
        }
        assert_eq!(state.len(), MEMORY_CAPACITY);
        assert_eq!(state.records().next().unwrap().ts, T0 + 1);
        assert_eq!(state.latest().unwrap().ts, T0 + 10);
    }

    #[test]
    fn test_last_seen_uses_most_recent() {
        let mut state = MemoryState::new();
        state.remember(Mood::Sad, T0);
        state.remember(Mood::Happy, T0 + 10);
        state.remember(Mood::Sad, T0 + 20);
        assert_eq!(state.last_seen(Mood::Sad), Some(T0 + 20));
        assert_eq!(state.last_seen(Mood::Tired), None);
    }

    #[test]
    fn test_recency_penalty_window() {
        let mut state = MemoryState::new();
        state.remember(Mood::Stressed, T0);

        assert_eq!(state.recency_penalty(Mood::Stressed, T0 + 59 * 60), RECENCY_PENALTY);
        assert_eq!(state.recency_penalty(Mood::Stressed, T0 + 3599), RECENCY_PENALTY);
        assert_eq!(state.recency_penalty(Mood::Stressed, T0 + 3600), 0.0);
        assert_eq!(state.recency_penalty(Mood::Tired, T0), 0.0);
    }

    #[test]
    fn test_recency_penalty_only_latest_occurrence() {
        let mut state = MemoryState::new();
        // Old occurrence then a fresh one: the fresh one decides.
        state.remember(Mood::Happy, T0);
        state.remember(Mood::Happy, T0 + 7200);
        assert_eq!(state.recency_penalty(Mood::Happy, T0 + 7200 + 60), RECENCY_PENALTY);

        // Many occurrences do not stack.
        let many: MemoryState = (0..5).map(|i| MoodRecord::new(Mood::Sad, T0 + i)).collect();
        assert_eq!(many.recency_penalty(Mood::Sad, T0 + 10), RECENCY_PENALTY);
    }

    #[test]
    fn test_future_record_counts_as_recent() {
        let mut state = MemoryState::new();
        state.remember(Mood::Tired, T0 + 500);
        assert_eq!(state.recency_penalty(Mood::Tired, T0), RECENCY_PENALTY);
    }

    #[test]
    fn test_from_iter_respects_capacity() {
        let state: MemoryState = (0..25).map(|i| MoodRecord::new(Mood::Sad, i)).collect();
        assert_eq!(state.len(), MEMORY_CAPACITY);
        assert_eq!(state.records().next().unwrap().ts, 15);
    }
}
