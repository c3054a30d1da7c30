//! PlaterKit Settings Crate
//!
//! Handles application configuration, the settings provider consumed by the
//! main frame, and persistence of window placement between sessions.

pub mod config;
pub mod error;
pub mod manager;
pub mod provider;

pub use config::{Config, HelpSettings, UiSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
pub use provider::{GuiSettings, SettingsProvider, MAIN_FRAME_KEY};
