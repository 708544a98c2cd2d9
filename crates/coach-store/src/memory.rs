use std::fs;
use std::path::{Path, PathBuf};

use coach_core::time::now_unix_secs;
use coach_core::{MemoryState, Mood, MoodRecord, export_json, import_json};

use crate::error::Result;

/// JSON-file-backed mood memory.
///
/// Every operation reloads the file; nothing is cached between calls. There
/// is no locking, so concurrent writers can lose updates.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    /// No I/O happens until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the memory file. A missing or unparseable file yields an empty
    /// state; this never fails.
    pub fn load(&self) -> MemoryState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("failed to read {}: {e}", self.path.display());
                }
                return MemoryState::new();
            }
        };

        match import_json(&content) {
            Ok(imported) => {
                if imported.dropped > 0 {
                    tracing::debug!(
                        "dropped {} malformed records from {}",
                        imported.dropped,
                        self.path.display()
                    );
                }
                imported.state
            }
            Err(e) => {
                tracing::warn!("ignoring corrupt memory file {}: {e}", self.path.display());
                MemoryState::new()
            }
        }
    }

    /// Overwrite the memory file with `state`.
    pub fn save(&self, state: &MemoryState) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = export_json(state)?;
        fs::write(&self.path, json)?;
        tracing::debug!("saved {} records to {}", state.len(), self.path.display());
        Ok(())
    }

    /// Load, push `mood` stamped now, truncate to capacity, save.
    pub fn append(&self, mood: Mood) -> Result<MoodRecord> {
        let record = MoodRecord::now(mood);
        self.append_record(record)?;
        Ok(record)
    }

    /// Load, push `record`, truncate to capacity, save.
    pub fn append_record(&self, record: MoodRecord) -> Result<()> {
        let mut state = self.load();
        state.push(record);
        self.save(&state)
    }

    /// Recency penalty for `mood` against the stored history, as of now.
    pub fn recency_penalty(&self, mood: Mood) -> f64 {
        self.load().recency_penalty(mood, now_unix_secs())
    }

    /// Overwrite the file with an empty history.
    pub fn reset(&self) -> Result<()> {
        self.save(&MemoryState::new())
    }

    /// Load and write back, normalizing the file to canonical form.
    pub fn flush(&self) -> Result<MemoryState> {
        let state = self.load();
        self.save(&state)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::{MEMORY_CAPACITY, RECENCY_PENALTY, RECENCY_WINDOW_SECS};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> MemoryStore {
        MemoryStore::new(dir.path().join("coach_memory.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.load().is_empty());
        assert!(!store.path().exists(), "load must not create the file");
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_huge_year_in_file_is_dropped() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(
            store.path(),
            r#"{"recent_moods":[{"mood":"sad","ts":"600000000000-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let mut state = MemoryState::new();
        state.remember(Mood::Sad, 1_771_632_000);
        state.remember(Mood::Happy, 1_771_632_600);

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_append_eleven_keeps_ten() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        for i in 0..11u64 {
            store
                .append_record(MoodRecord::new(Mood::ALL[(i % 5) as usize], 1_000 + i))
                .unwrap();
        }
        let state = store.load();
        assert_eq!(state.len(), MEMORY_CAPACITY);
        assert_eq!(state.records().next().unwrap().ts, 1_001);
        assert_eq!(state.latest().unwrap().ts, 1_010);
    }

    #[test]
    fn test_append_stamps_now_and_penalizes() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let before = now_unix_secs();
        let record = store.append(Mood::Tired).unwrap();
        assert!(record.ts >= before);
        assert_eq!(store.recency_penalty(Mood::Tired), RECENCY_PENALTY);
        assert_eq!(store.recency_penalty(Mood::Happy), 0.0);
    }

    #[test]
    fn test_old_record_not_penalized() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let old = now_unix_secs() - RECENCY_WINDOW_SECS - 1;
        store.append_record(MoodRecord::new(Mood::Sad, old)).unwrap();
        assert_eq!(store.recency_penalty(Mood::Sad), 0.0);
    }

    #[test]
    fn test_reset_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.append(Mood::Happy).unwrap();
        store.reset().unwrap();
        assert!(store.load().is_empty());
        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["recent_moods"], serde_json::json!([]));
    }

    #[test]
    fn test_flush_normalizes_and_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let store = MemoryStore::new(dir.path().join("nested/deeper/memory.json"));
        let state = store.flush().unwrap();
        assert!(state.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_reads_naive_timestamps_from_older_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(
            store.path(),
            r#"{"recent_moods": [{"mood": "happy", "ts": "2026-02-21T00:00:00.000001"}]}"#,
        )
        .unwrap();
        let state = store.load();
        assert_eq!(state.latest(), Some(&MoodRecord::new(Mood::Happy, 1_771_632_000)));

        store.flush().unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("2026-02-21T00:00:00Z"));
    }
}
