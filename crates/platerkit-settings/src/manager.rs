//! Settings Manager
//!
//! Resolves the platform configuration directory and loads the config file
//! with fallback to defaults.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "platerkit";
const CONFIG_FILE: &str = "config.json";

/// Locates and loads the application configuration
pub struct SettingsManager;

impl SettingsManager {
    /// Platform config directory for PlaterKit
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Full path of the config file
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the config directory if it does not exist
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Load the config at `path`, or defaults when it is missing or unreadable
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Config::default();
        }

        match Config::load_from_file(path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load settings: {}", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = SettingsManager::config_file_path() {
            assert!(path.ends_with("platerkit/config.json"));
        }
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SettingsManager::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(SettingsManager::load_or_default(&path), Config::default());
    }
}
