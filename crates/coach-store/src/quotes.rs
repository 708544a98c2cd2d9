use std::fs;
use std::path::{Path, PathBuf};

/// Optional external quotes list: a JSON array of strings.
///
/// Reread on every call so edits take effect without a restart.
#[derive(Debug, Clone)]
pub struct QuoteSource {
    path: PathBuf,
}

impl QuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The external quotes, or `None` when the file is missing, unreadable,
    /// not a list of strings, or empty.
    pub fn load(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(quotes) if !quotes.is_empty() => Some(quotes),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("ignoring quotes file {}: {e}", self.path.display());
                None
            }
        }
    }
}
