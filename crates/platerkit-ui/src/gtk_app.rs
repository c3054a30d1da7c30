use gtk4::prelude::*;
use libadwaita::Application as AdwApplication;
use std::path::PathBuf;

use crate::ui::gtk::GtkFrame;
use platerkit_core::shared;
use platerkit_settings::{GuiSettings, SettingsManager};

pub const APP_ID: &str = "org.platerkit.PlaterKit";

/// Run the application until its last window closes
pub fn main() -> anyhow::Result<()> {
    let app = AdwApplication::builder().application_id(APP_ID).build();

    app.connect_activate(|app| {
        // Single instance: a second launch raises the existing frame
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        let config_path = SettingsManager::config_file_path().unwrap_or_else(|e| {
            tracing::warn!("Config directory unavailable: {}", e);
            PathBuf::from("config.json")
        });
        let config = SettingsManager::load_or_default(&config_path);
        let settings = shared(GuiSettings::with_file(config, config_path));

        let frame = GtkFrame::new(app, settings, crate_version());
        frame.present();
    });

    exit_status(app.run())
}

fn exit_status(code: glib::ExitCode) -> anyhow::Result<()> {
    if code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with status {:?}", code);
    }
    Ok(())
}

fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
