//! Main Window
//!
//! Toolkit-independent model of the top-level frame: menu bar, workspace
//! tabs, status bar and shutdown handling. Toolkit bindings forward their
//! events here and mirror the results onto widgets.

use crate::ui::menu::{build_menu_bar, MenuAction, MenuBar};
use crate::ui::panels::{HostServices, PanelFactory, PresetEditor, PresetKind};
use crate::ui::shutdown::{CloseDecision, CloseRequest, ShutdownCoordinator, ShutdownState};
use crate::ui::workspace::{ClosedTab, DeferredAction, PresetTab, TabId, WorkspaceContainer};
use platerkit_core::{Point, Result, Shared, Size, WindowGeometry};
use platerkit_settings::{SettingsProvider, MAIN_FRAME_KEY};

/// Smallest size the frame may be shrunk to
pub const MIN_SIZE: Size = Size::new(760, 490);

/// Startup status text; `{version}` and `{website}` are substituted
pub const WELCOME_TEMPLATE: &str =
    "Version {version} - Remember to check for updates at {website}";

/// Construction parameters supplied by the host application
#[derive(Debug, Clone)]
pub struct MainWindowOptions {
    pub title: String,
    pub position: Point,
    pub size: Size,
    /// Substituted into the welcome text
    pub version: String,
}

impl Default for MainWindowOptions {
    fn default() -> Self {
        Self {
            title: "PlaterKit".to_string(),
            position: Point::default(),
            size: MIN_SIZE,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Application status bar
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    text: String,
}

impl StatusBar {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Main application window
pub struct MainWindow {
    title: String,
    position: Point,
    size: Size,
    maximized: bool,
    settings: Shared<dyn SettingsProvider>,
    workspace: WorkspaceContainer,
    menu_bar: MenuBar,
    status_bar: StatusBar,
    shutdown: ShutdownCoordinator,
    host: Box<dyn HostServices>,
}

impl MainWindow {
    /// Create the frame: workspace, menus, status text, then placement.
    ///
    /// The requested size is clamped to `MIN_SIZE`; a placement saved under
    /// `MAIN_FRAME_KEY` takes precedence when one exists.
    pub fn new(
        options: MainWindowOptions,
        settings: Shared<dyn SettingsProvider>,
        factory: &dyn PanelFactory,
        host: Box<dyn HostServices>,
    ) -> Self {
        let workspace = WorkspaceContainer::initialize(&*settings.borrow(), factory);
        let menu_bar = build_menu_bar();

        let mut status_bar = StatusBar::default();
        let website = settings.borrow().website_url();
        status_bar.set_text(
            WELCOME_TEMPLATE
                .replace("{version}", &options.version)
                .replace("{website}", &website),
        );

        let mut window = Self {
            title: options.title,
            position: options.position,
            size: options.size.clamp_min(MIN_SIZE),
            maximized: false,
            settings,
            workspace,
            menu_bar,
            status_bar,
            shutdown: ShutdownCoordinator::new(),
            host,
        };
        window.restore_geometry();
        window
    }

    fn restore_geometry(&mut self) {
        let restored = self.settings.borrow().restore_window_position(MAIN_FRAME_KEY);
        match restored {
            Ok(Some(geometry)) => {
                self.position = geometry.position();
                self.size = geometry.size().clamp_min(MIN_SIZE);
                self.maximized = geometry.maximized;
                tracing::debug!("Restored main window to {} at {:?}", self.size, self.position);
            }
            Ok(None) => tracing::debug!("No saved main window position"),
            Err(e) => tracing::warn!("Failed to restore window position: {}", e),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn min_size(&self) -> Size {
        MIN_SIZE
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::new(self.position, self.size).with_maximized(self.maximized)
    }

    /// Toolkit notification that the window moved or was resized
    pub fn set_geometry(&mut self, position: Point, size: Size) {
        self.position = position;
        self.size = size.clamp_min(MIN_SIZE);
    }

    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    pub fn menu_bar(&self) -> &MenuBar {
        &self.menu_bar
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn workspace(&self) -> &WorkspaceContainer {
        &self.workspace
    }

    pub fn shutdown_state(&self) -> ShutdownState {
        self.shutdown.state()
    }

    /// Run the action bound to a menu item.
    ///
    /// A failing host action is logged and shown in the status bar.
    pub fn activate(&mut self, action: MenuAction) {
        tracing::debug!("Menu action '{}'", action.id());
        if let Err(e) = self.dispatch(action) {
            tracing::warn!("Menu action '{}' failed: {}", action.id(), e);
            self.status_bar.set_text(e.to_string());
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::OpenModel => match self.workspace.plater_mut() {
                Some(plater) => plater.add_model(),
                None => tracing::debug!("No plater, '{}' skipped", action.id()),
            },
            MenuAction::ArrangeModels => match self.workspace.plater_mut() {
                Some(plater) => plater.arrange_models(),
                None => tracing::debug!("No plater, '{}' skipped", action.id()),
            },
            MenuAction::OpenWebsite => {
                let url = self.settings.borrow().website_url();
                self.host.open_url(&url)?;
            }
            MenuAction::OpenManual => {
                let url = self.settings.borrow().manual_url();
                self.host.open_url(&url)?;
            }
            MenuAction::CheckForUpdates => self.host.check_for_updates(true)?,
            MenuAction::ShowAbout => self.host.show_about()?,
        }
        Ok(())
    }

    /// Forward a tab selection; returns the active tab's closability
    pub fn on_selection_changed(&mut self, index: usize) -> bool {
        if let Err(e) = self.workspace.on_selection_changed(index) {
            tracing::warn!("Ignoring selection change: {}", e);
        }
        self.workspace.active_tab_closable()
    }

    /// Forward a tab close request. `None` when the tab stays open.
    pub fn on_tab_close_requested(&mut self, id: TabId) -> Option<ClosedTab> {
        match self.workspace.on_tab_close_requested(id) {
            Ok(closed) => Some(closed),
            Err(e) => {
                tracing::warn!("Tab close refused: {}", e);
                None
            }
        }
    }

    pub fn open_preset_editor<F>(&mut self, kind: PresetKind, create: F) -> PresetTab
    where
        F: FnOnce() -> Box<dyn PresetEditor>,
    {
        self.workspace.open_preset_editor(kind, create)
    }

    /// Run work deferred by earlier events
    pub fn run_deferred(&mut self) -> Vec<DeferredAction> {
        self.workspace.run_deferred()
    }

    /// Decide a window close request
    pub fn on_close_request(&mut self, request: CloseRequest) -> CloseDecision {
        let geometry = self.geometry();
        let mut settings = self.settings.borrow_mut();
        self.shutdown.on_close_request(
            request,
            self.workspace.plater_mut(),
            &mut *settings,
            geometry,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_template_placeholders() {
        let text = WELCOME_TEMPLATE
            .replace("{version}", "1.3.0")
            .replace("{website}", "http://www.slic3r.org");
        assert_eq!(
            text,
            "Version 1.3.0 - Remember to check for updates at http://www.slic3r.org"
        );
    }

    #[test]
    fn test_status_bar_text() {
        let mut status = StatusBar::default();
        assert_eq!(status.text(), "");
        status.set_text("Ready");
        assert_eq!(status.text(), "Ready");
    }

    #[test]
    fn test_default_options_respect_min_size() {
        let options = MainWindowOptions::default();
        assert_eq!(options.size, MIN_SIZE);
        assert_eq!(options.title, "PlaterKit");
    }
}
