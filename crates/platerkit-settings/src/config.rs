//! Configuration file model for PlaterKit
//!
//! Supports JSON and TOML file formats, chosen by file extension.
//!
//! Configuration is organized into sections:
//! - UI preferences (host tab, saved window placement)
//! - Help links (website, manual, update page)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use platerkit_core::WindowGeometry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// UI preference settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Show the printer Controller tab
    #[serde(default)]
    pub show_host: bool,
    /// Saved window placement, keyed by window name
    #[serde(default)]
    pub window_positions: HashMap<String, WindowGeometry>,
}

/// Links opened from the Help menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpSettings {
    pub website_url: String,
    pub manual_url: String,
    /// Page used by "Check for Updates"
    pub updates_url: String,
}

impl Default for HelpSettings {
    fn default() -> Self {
        Self {
            website_url: "http://www.slic3r.org".to_string(),
            manual_url: "http://manual.slic3r.org/".to_string(),
            updates_url: "https://github.com/slic3r/Slic3r/releases".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub help: HelpSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let urls = [
            ("help.website_url", &self.help.website_url),
            ("help.manual_url", &self.help.manual_url),
            ("help.updates_url", &self.help.updates_url),
        ];
        for (key, url) in urls {
            if url.trim().is_empty() {
                return Err(ConfigError::MissingValue(key.to_string()));
            }
        }

        if let Some((key, _)) = self
            .ui
            .window_positions
            .iter()
            .find(|(_, geometry)| geometry.size().is_empty())
        {
            return Err(ConfigError::EmptyGeometry { key: key.clone() });
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
