use std::path::{Path, PathBuf};
use std::{env, fs};

use coach_core::DEFAULT_SUGGESTIONS;
use serde::Deserialize;

use crate::error::{Result, StoreError};

/// Name of the optional config file inside the data directory.
pub const CONFIG_FILE: &str = "coach.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "COACH_DATA_DIR";

/// Data directory: `COACH_DATA_DIR` if set, else the current directory.
pub fn default_data_dir() -> PathBuf {
    env::var(DATA_DIR_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Settings read from `coach.toml`. Every field is optional.
///
/// ```toml
/// memory_file = "coach_memory.json"
/// quotes_file = "quotes.json"
/// suggestions = 3
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoachConfig {
    pub memory_file: PathBuf,
    pub quotes_file: PathBuf,
    pub suggestions: usize,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            memory_file: PathBuf::from("coach_memory.json"),
            quotes_file: PathBuf::from("quotes.json"),
            suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

impl CoachConfig {
    /// Load `coach.toml` from `data_dir`, falling back to defaults when the
    /// file does not exist. Relative paths are resolved against `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config = match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).map_err(|message| StoreError::Config {
                path: path.clone(),
                message,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.memory_file = data_dir.join(&config.memory_file);
        config.quotes_file = data_dir.join(&config.quotes_file);
        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
