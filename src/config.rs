//! Storage configuration for the flat-file data set.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use thiserror::Error;

/// Default directory holding the backing files.
const DEFAULT_DATA_DIR: &str = "data";
/// Default user file name.
const DEFAULT_USERS_FILE: &str = "users.csv";
/// Default task file name.
const DEFAULT_TASKS_FILE: &str = "tasks.csv";
/// Default status-change log file name.
const DEFAULT_LOGS_FILE: &str = "logs.csv";

/// Locations of the delimited files backing the stores.
///
/// Loaded from a JSON document; every field falls back to its default, so
/// an empty document (or no configuration file at all) selects the stock
/// `data/` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory containing the backing files.
    pub data_dir: Utf8PathBuf,
    /// User file name, relative to [`StorageConfig::data_dir`].
    pub users_file: Utf8PathBuf,
    /// Task file name, relative to [`StorageConfig::data_dir`].
    pub tasks_file: Utf8PathBuf,
    /// Status-change log file name, relative to [`StorageConfig::data_dir`].
    pub logs_file: Utf8PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            users_file: Utf8PathBuf::from(DEFAULT_USERS_FILE),
            tasks_file: Utf8PathBuf::from(DEFAULT_TASKS_FILE),
            logs_file: Utf8PathBuf::from(DEFAULT_LOGS_FILE),
        }
    }
}

impl StorageConfig {
    /// Loads configuration from a JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents do not match this schema.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path.as_std_path()).map_err(|err| ConfigError::Read {
            path: path.to_owned(),
            source: err,
        })?;
        serde_json::from_slice(&bytes).map_err(ConfigError::Parse)
    }
}

/// Errors raised while loading storage configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
