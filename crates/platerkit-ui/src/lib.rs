//! # PlaterKit UI
//!
//! Main window and tab lifecycle for PlaterKit.

#[cfg(feature = "gtk")]
pub mod gtk_app;
pub mod ui;

pub use ui::main_window::{MainWindow, MainWindowOptions, StatusBar, MIN_SIZE, WELCOME_TEMPLATE};
pub use ui::menu::{build_menu_bar, Menu, MenuAction, MenuBar, MenuItem};
pub use ui::panels::{
    ControllerPanel, HostServices, PanelFactory, PanelKind, PlaterPanel, PresetEditor, PresetKind,
};
pub use ui::preset_registry::PresetEditorRegistry;
pub use ui::shutdown::{CloseDecision, CloseRequest, ShutdownCoordinator, ShutdownState};
pub use ui::workspace::{
    closable_at, ClosedTab, DeferredAction, PresetTab, Tab, TabId, WorkspaceContainer,
};

pub use platerkit_settings::{Config, GuiSettings, SettingsManager, SettingsProvider};
