//! Settings provider consumed by the main frame.
//!
//! The frame reads the `show_host` flag once at startup, restores its
//! placement from a named slot and saves it back on shutdown. `GuiSettings`
//! backs this with a `Config` and an optional file that is rewritten on
//! every save.

use crate::config::Config;
use crate::error::SettingsResult;
use platerkit_core::WindowGeometry;
use std::path::{Path, PathBuf};

/// Slot name of the main window placement
pub const MAIN_FRAME_KEY: &str = "main_frame";

/// Persisted settings the main frame depends on
pub trait SettingsProvider {
    /// Whether the Controller tab is shown
    fn show_host(&self) -> bool;

    /// Saved placement for `key`, if any
    fn restore_window_position(&self, key: &str) -> SettingsResult<Option<WindowGeometry>>;

    /// Store the placement for `key`
    fn save_window_position(&mut self, key: &str, geometry: WindowGeometry) -> SettingsResult<()>;

    fn website_url(&self) -> String;

    fn manual_url(&self) -> String;

    fn updates_url(&self) -> String;
}

/// File-backed settings used by the application
#[derive(Debug, Clone, Default)]
pub struct GuiSettings {
    config: Config,
    path: Option<PathBuf>,
}

impl GuiSettings {
    /// In-memory settings, never written to disk
    pub fn new(config: Config) -> Self {
        Self { config, path: None }
    }

    /// Settings saved to `path` on every change
    pub fn with_file(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            path: Some(path.into()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the config to its backing file, if it has one
    pub fn flush(&self) -> SettingsResult<()> {
        match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                self.config.save_to_file(path)
            }
            None => Ok(()),
        }
    }
}

impl SettingsProvider for GuiSettings {
    fn show_host(&self) -> bool {
        self.config.ui.show_host
    }

    fn restore_window_position(&self, key: &str) -> SettingsResult<Option<WindowGeometry>> {
        Ok(self.config.ui.window_positions.get(key).copied())
    }

    fn save_window_position(&mut self, key: &str, geometry: WindowGeometry) -> SettingsResult<()> {
        self.config
            .ui
            .window_positions
            .insert(key.to_string(), geometry);
        tracing::debug!(
            "Saving window position '{}' ({}x{} at {},{})",
            key,
            geometry.width,
            geometry.height,
            geometry.x,
            geometry.y
        );
        self.flush()
    }

    fn website_url(&self) -> String {
        self.config.help.website_url.clone()
    }

    fn manual_url(&self) -> String {
        self.config.help.manual_url.clone()
    }

    fn updates_url(&self) -> String {
        self.config.help.updates_url.clone()
    }
}
