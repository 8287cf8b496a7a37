//! User settings for keeper-cli
//!
//! Persisted preferences: currency symbol, date format. The vault secret
//! key is deliberately not stored here; it is injected via the
//! `VAULT_SECRET_KEY` environment variable so the key never touches disk
//! alongside the data it protects.

use serde::{Deserialize, Serialize};

use super::paths::KeeperPaths;
use crate::error::KeeperError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for keeper-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if no file exists yet
    pub fn load_or_create(paths: &KeeperPaths) -> Result<Self, KeeperError> {
        let path = paths.settings_file();
        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KeeperPaths) -> Result<(), KeeperError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
