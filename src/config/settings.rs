//! User settings for garage-cli
//!
//! Display preferences persisted as config.json in the base directory.

use serde::{Deserialize, Serialize};

use super::paths::GaragePaths;
use crate::error::GarageError;
use crate::storage::file_io::write_json_atomic;

/// User settings for garage-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used by terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
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
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults if it doesn't exist
    pub fn load_or_create(paths: &GaragePaths) -> Result<Self, GarageError> {
        let path = paths.settings_file();

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| GarageError::Config(format!("Failed to read settings: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| GarageError::Config(format!("Failed to parse settings: {}", e)))
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GaragePaths) -> Result<(), GarageError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
