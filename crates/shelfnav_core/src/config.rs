//! Runtime configuration for front-ends embedding the core.
//!
//! There are no environment variables; front-ends fill `AppConfig` from their
//! own inputs and fall back to these defaults.

use crate::logging::default_log_level;
use crate::store::{JsonFileStore, DEFAULT_DATA_FILE};
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "logs";

/// Resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Inventory JSON file.
    pub data_file: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Log directory; `None` means `<data file dir>/logs`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Store for the configured data file.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.data_file.clone())
    }

    /// Absolute log directory, anchored at `cwd` when relative.
    pub fn resolve_log_dir(&self, cwd: &Path) -> PathBuf {
        let dir = match &self.log_dir {
            Some(dir) => dir.clone(),
            None => match self.data_file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.join(LOG_DIR_NAME),
                _ => PathBuf::from(LOG_DIR_NAME),
            },
        };
        if dir.is_absolute() {
            dir
        } else {
            cwd.join(dir)
        }
    }
}
