//! Menu bar model
//!
//! Static menu hierarchy of the main frame. Labels use `&` mnemonics and
//! accelerators are written `Ctrl+O`; toolkit bindings translate both.

/// Action bound to a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    OpenModel,
    ArrangeModels,
    OpenWebsite,
    CheckForUpdates,
    OpenManual,
    ShowAbout,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        Self::OpenModel,
        Self::ArrangeModels,
        Self::OpenWebsite,
        Self::CheckForUpdates,
        Self::OpenManual,
        Self::ShowAbout,
    ];

    /// Stable action name, usable as a toolkit action id
    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenModel => "open_model",
            Self::ArrangeModels => "arrange_models",
            Self::OpenWebsite => "open_website",
            Self::CheckForUpdates => "check_for_updates",
            Self::OpenManual => "open_manual",
            Self::ShowAbout => "about",
        }
    }
}

/// Menu item definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Menu label
    pub label: String,
    /// Status-bar help
    pub help: String,
    /// Icon file name
    pub icon: Option<String>,
    /// Keyboard shortcut
    pub accelerator: Option<String>,
    pub action: MenuAction,
    pub enabled: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, help: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            help: help.into(),
            icon: None,
            accelerator: None,
            action,
            enabled: true,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }
}

/// One top-level menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub label: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Label with the mnemonic marker removed
    pub fn plain_label(&self) -> String {
        self.label.replace('&', "")
    }
}

/// Menu bar with all application menus, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
}

impl MenuBar {
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn menu(&self, plain_label: &str) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.plain_label() == plain_label)
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menus.iter().flat_map(|menu| menu.items.iter())
    }

    pub fn item_for(&self, action: MenuAction) -> Option<&MenuItem> {
        self.items().find(|item| item.action == action)
    }
}

/// Build the application menu bar.
///
/// Object, Settings, View and Window are kept even while empty so the bar
/// layout does not shift as items are added.
pub fn build_menu_bar() -> MenuBar {
    let file = Menu::new("&File").with_item(
        MenuItem::new("Open STL/OBJ/AMF/3MF…", "Open a model", MenuAction::OpenModel)
            .with_icon("brick_add.png")
            .with_accelerator("Ctrl+O"),
    );

    let plater = Menu::new("&Plater").with_item(
        MenuItem::new("Arrange…", "Arrange models on plater", MenuAction::ArrangeModels)
            .with_icon("bricks.png")
            .with_accelerator("Ctrl+G"),
    );

    let help = Menu::new("&Help")
        .with_item(MenuItem::new(
            "PlaterKit &Website",
            "Open the PlaterKit website in your browser",
            MenuAction::OpenWebsite,
        ))
        .with_item(MenuItem::new(
            "Check for &Updates...",
            "Check for new PlaterKit versions",
            MenuAction::CheckForUpdates,
        ))
        .with_item(MenuItem::new(
            "PlaterKit &Manual",
            "Open the PlaterKit manual in your browser",
            MenuAction::OpenManual,
        ))
        .with_item(MenuItem::new(
            "&About PlaterKit",
            "Show about dialog",
            MenuAction::ShowAbout,
        ));

    MenuBar {
        menus: vec![
            file,
            plater,
            Menu::new("&Object"),
            Menu::new("&Settings"),
            Menu::new("&View"),
            Menu::new("&Window"),
            help,
        ],
    }
}
