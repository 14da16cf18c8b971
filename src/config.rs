// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences to a `settings.toml` file.
//!
//! The file lives under the platform config directory (e.g.
//! `~/.config/ApodGallery/settings.toml` on Linux). All fields are optional
//! so a hand-edited partial file still loads.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ApodGallery";

/// Number of trailing days covered by the default date range.
pub const DEFAULT_RANGE_DAYS: i64 = 9;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// NASA API key override. When absent the embedded demo key is used.
    pub api_key: Option<String>,
    /// Length of the default trailing date range, in days.
    #[serde(default)]
    pub range_days: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            range_days: Some(DEFAULT_RANGE_DAYS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location, falling back to
/// defaults when the file does not exist.
pub fn load() -> Result<Config> {
    match get_default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the configuration from an explicit path (used by `--config-dir`
/// overrides and tests).
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default location, creating the parent
/// directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = get_default_config_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_demo_range() {
        let config = Config::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.range_days, Some(DEFAULT_RANGE_DAYS));
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            api_key: Some("abc123".to_string()),
            range_days: Some(30),
        };
        save_to_path(&config, &path).expect("save config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_none() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "api_key = \"xyz\"\n").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.api_key.as_deref(), Some("xyz"));
        assert_eq!(loaded.range_days, None);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("does-not-exist.toml");
        assert!(load_from_path(&path).is_err());
    }
}
