pub mod config;
pub mod error;
pub mod memory;
pub mod quotes;

pub use config::{CoachConfig, DATA_DIR_ENV, default_data_dir};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use quotes::QuoteSource;

use std::path::{Path, PathBuf};

/// Everything the coach persists, resolved from one data directory.
///
/// Layout:
/// ```text
/// <data-dir>/
/// ├── coach.toml          (optional)
/// ├── coach_memory.json
/// └── quotes.json         (optional)
/// ```
#[derive(Debug, Clone)]
pub struct CoachStore {
    data_dir: PathBuf,
    config: CoachConfig,
    memory: MemoryStore,
    quotes: QuoteSource,
}

impl CoachStore {
    /// Resolve config and file locations. `data_dir` overrides
    /// [`default_data_dir`]. Does not touch the memory file.
    pub fn open(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = data_dir.map(PathBuf::from).unwrap_or_else(default_data_dir);
        let config = CoachConfig::load(&data_dir)?;
        let memory = MemoryStore::new(&config.memory_file);
        let quotes = QuoteSource::new(&config.quotes_file);
        tracing::debug!(
            "coach store at {} (memory={}, quotes={})",
            data_dir.display(),
            memory.path().display(),
            quotes.path().display()
        );
        Ok(Self {
            data_dir,
            config,
            memory,
            quotes,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn quotes(&self) -> &QuoteSource {
        &self.quotes
    }
}
