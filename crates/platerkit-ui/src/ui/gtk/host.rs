//! Desktop integration for the Help menu.

use gtk4::prelude::*;
use gtk4::ApplicationWindow;
use platerkit_core::CollaboratorError;

use crate::ui::panels::HostServices;

pub struct GtkHost {
    window: ApplicationWindow,
    website_url: String,
    updates_url: String,
    version: String,
}

impl GtkHost {
    pub fn new(
        window: &ApplicationWindow,
        website_url: impl Into<String>,
        updates_url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            window: window.clone(),
            website_url: website_url.into(),
            updates_url: updates_url.into(),
            version: version.into(),
        }
    }
}

impl HostServices for GtkHost {
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError> {
        tracing::info!("Opening {}", url);
        gio::AppInfo::launch_default_for_uri(url, None::<&gio::AppLaunchContext>)
            .map_err(|e| CollaboratorError::failed("Browser", e.to_string()))
    }

    /// Release checks happen on the project's download page.
    fn check_for_updates(&self, manual: bool) -> Result<(), CollaboratorError> {
        tracing::debug!("Update check requested (manual={})", manual);
        self.open_url(&self.updates_url)
    }

    fn show_about(&self) -> Result<(), CollaboratorError> {
        let about = gtk4::AboutDialog::builder()
            .program_name("PlaterKit")
            .version(self.version.as_str())
            .comments("3D model preparation for FDM printers")
            .website(self.website_url.as_str())
            .transient_for(&self.window)
            .modal(true)
            .build();
        about.present();
        Ok(())
    }
}
