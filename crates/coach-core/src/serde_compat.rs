//! JSON serde for the memory file wire format.
//!
//! The wire format is `{"recent_moods": [{"mood": "...", "ts": "..."}]}`,
//! oldest first, with `ts` as an ISO-8601 UTC string.

use serde::{Deserialize, Serialize};

use crate::memory::{MemoryState, MoodRecord};
use crate::mood::Mood;
use crate::time::{parse_iso8601, unix_to_iso8601};

// --- Wire format types ---

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct WireMemory {
    #[serde(default)]
    pub recent_moods: Vec<WireRecord>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WireRecord {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub ts: String,
}

/// Result of converting wire records to the domain model.
#[derive(Debug)]
pub struct Imported {
    pub state: MemoryState,
    /// Records skipped for an unknown mood or an unparseable timestamp.
    pub dropped: usize,
}

// --- Conversion ---

impl WireMemory {
    /// Convert to the domain state, skipping malformed records.
    /// More than [`crate::MEMORY_CAPACITY`] records keeps the newest ones.
    pub fn into_state(self) -> Imported {
        let total = self.recent_moods.len();
        let records: Vec<MoodRecord> = self
            .recent_moods
            .into_iter()
            .filter_map(|r| {
                let mood = r.mood.parse::<Mood>().ok()?;
                let ts = parse_iso8601(&r.ts)?;
                Some(MoodRecord::new(mood, ts))
            })
            .collect();
        let dropped = total - records.len();
        Imported {
            state: records.into_iter().collect(),
            dropped,
        }
    }

    pub fn from_state(state: &MemoryState) -> Self {
        Self {
            recent_moods: state
                .records()
                .map(|r| WireRecord {
                    mood: r.mood.as_str().to_string(),
                    ts: unix_to_iso8601(r.ts),
                })
                .collect(),
        }
    }
}

/// Serialize a memory state to pretty-printed JSON.
pub fn export_json(state: &MemoryState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&WireMemory::from_state(state))
}

/// Parse memory-file JSON. Structural errors fail the whole import;
/// individual malformed records are dropped and counted.
pub fn import_json(json: &str) -> serde_json::Result<Imported> {
    let wire: WireMemory = serde_json::from_str(json)?;
    Ok(wire.into_state())
}
