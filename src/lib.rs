//! # PlaterKit
//!
//! Desktop shell for preparing 3D models for FDM printing. The main window
//! hosts a workspace of tabs:
//!
//! - **Plater** - arranges models on the print bed, always first
//! - **Controller** - printer host panel, shown when enabled in settings
//! - **Preset editors** - print, filament and printer settings, opened on demand
//!
//! ## Architecture
//!
//! 1. **platerkit-core** - geometry, shared handles, deferred work, errors
//! 2. **platerkit-settings** - configuration file and window-state persistence
//! 3. **platerkit-ui** - main window, workspace, menus, shutdown, GTK bindings
//! 4. **platerkit** - main binary that integrates all crates

pub use platerkit_core::{Error, Point, Result, Size, WindowGeometry};
pub use platerkit_settings::{Config, GuiSettings, SettingsManager, SettingsProvider};
pub use platerkit_ui::ui;
pub use platerkit_ui::{MainWindow, MainWindowOptions, WorkspaceContainer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Set to any value to emit JSON log lines instead of pretty output
pub const LOG_JSON_ENV: &str = "PLATERKIT_LOG_JSON";

/// Initialize logging.
///
/// `RUST_LOG` filters on top of an `info` default. Windows release builds
/// have no console, so they append to `platerkit.log` in the config
/// directory (falling back to the executable's directory).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let json = std::env::var_os(LOG_JSON_ENV).is_some();

    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;
        use std::sync::Mutex;

        let log_dir = SettingsManager::ensure_config_dir()
            .ok()
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("platerkit.log"))
        {
            Ok(file) => {
                let writer = Mutex::new(file);
                let layer = fmt::layer().with_writer(writer).with_ansi(false);
                let layer = if json { layer.json().boxed() } else { layer.boxed() };
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .try_init()?;
            }
            // No writable log location, run silent
            Err(_) => tracing_subscriber::registry().with(env_filter).try_init()?,
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_line_number(true);
        let layer = if json {
            layer.json().boxed()
        } else {
            layer.pretty().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_init_logging_twice_is_an_error() {
        // The first call may race with other tests; the second always fails.
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
