//! User configuration.
//!
//! Stored as TOML at `<config dir>/typist/config.toml`. A missing file is
//! not an error; defaults apply. `migrate_config` brings an existing file up
//! to date by inserting missing keys while leaving the user's comments and
//! formatting untouched (via `toml_edit`).

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::debug;

use crate::effect::Pacing;

/// Errors from loading, saving, or migrating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Malformed TOML: {0}")]
    Edit(#[from] toml_edit::TomlError),
}

/// Typewriter pacing as stored in the config file (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Delay per typed character
    pub type_char_ms: u64,
    /// Delay per erased character
    pub delete_char_ms: u64,
    /// Hold time on a fully typed phrase
    pub hold_ms: u64,
    /// Rest time after a phrase is erased
    pub rest_ms: u64,
    /// Delay before the first tick
    pub start_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            type_char_ms: 100,
            delete_char_ms: 50,
            hold_ms: 2000,
            rest_ms: 500,
            start_delay_ms: 1000,
        }
    }
}

impl PacingConfig {
    /// Convert to the effect-level pacing type.
    pub fn to_pacing(&self) -> Pacing {
        Pacing {
            type_char: Duration::from_millis(self.type_char_ms),
            delete_char: Duration::from_millis(self.delete_char_ms),
            hold: Duration::from_millis(self.hold_ms),
            rest: Duration::from_millis(self.rest_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Phrases to rotate through
    pub phrases: Vec<String>,
    /// Color theme name ("default", "classic", "ocean")
    pub theme: String,
    /// Typewriter pacing
    pub pacing: PacingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Full Stack Developer".to_string(),
                "Software Architect".to_string(),
                "Open Source Enthusiast".to_string(),
                "UI/UX Designer".to_string(),
            ],
            theme: "default".to_string(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("typist").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Outcome of a config migration.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// Migrated file content
    pub content: String,
    /// Dotted names of the keys that were added
    pub added: Vec<String>,
}

impl MigrationResult {
    /// True when the migration added anything.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Add missing keys from the default config to `existing`.
///
/// Keys already present keep their values; comments and formatting of the
/// existing content are preserved.
pub fn migrate_config(existing: &str) -> Result<MigrationResult, ConfigError> {
    let mut doc: DocumentMut = existing.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added = Vec::new();
    merge_missing(doc.as_table_mut(), defaults.as_table(), "", &mut added);

    Ok(MigrationResult {
        content: doc.to_string(),
        added,
    })
}

fn merge_missing(
    target: &mut toml_edit::Table,
    defaults: &toml_edit::Table,
    prefix: &str,
    added: &mut Vec<String>,
) {
    for (key, value) in defaults.iter() {
        let label = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match target.get_mut(key) {
            Some(existing) => {
                if let (Some(existing_table), Some(default_table)) =
                    (existing.as_table_mut(), value.as_table())
                {
                    merge_missing(existing_table, default_table, &label, added);
                }
            }
            None => {
                target.insert(key, value.clone());
                added.push(label);
            }
        }
    }
}
