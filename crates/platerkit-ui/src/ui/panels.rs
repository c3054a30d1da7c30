//! Collaborator contracts
//!
//! The frame only talks to its panels and host services through these
//! traits. Implementations live in the toolkit binding (`ui::gtk`) or in
//! tests.

use platerkit_core::CollaboratorError;
use platerkit_settings::SettingsProvider;

/// Panel kind carried by every tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Plater,
    Controller,
    PresetEditor(PresetKind),
}

impl PanelKind {
    pub fn is_preset_editor(&self) -> bool {
        matches!(self, Self::PresetEditor(_))
    }
}

/// Preset families that can be edited in a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    Print,
    Filament,
    Printer,
}

impl PresetKind {
    pub const ALL: [PresetKind; 3] = [Self::Print, Self::Filament, Self::Printer];

    /// Identifier used for actions and logs
    pub fn id(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Filament => "filament",
            Self::Printer => "printer",
        }
    }
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Print => write!(f, "Print Settings"),
            Self::Filament => write!(f, "Filament Settings"),
            Self::Printer => write!(f, "Printer Settings"),
        }
    }
}

/// The model-arrangement workspace
pub trait PlaterPanel {
    fn name(&self) -> String;

    /// Ask the user whether unsaved changes may be discarded.
    /// `false` means the pending operation must be cancelled.
    fn prompt_unsaved_changes(&mut self) -> bool;

    fn add_model(&mut self);

    fn arrange_models(&mut self);
}

/// The printer host workspace
pub trait ControllerPanel {
    fn name(&self) -> String;
}

/// A dynamically opened preset editor
pub trait PresetEditor {
    fn name(&self) -> String;

    /// Release the editor's resources. Called exactly once, before the tab
    /// is removed.
    fn dispose(&mut self);
}

/// Builds the structural panels when the workspace initializes
pub trait PanelFactory {
    fn create_plater(&self, settings: &dyn SettingsProvider) -> Box<dyn PlaterPanel>;

    fn create_controller(&self) -> Box<dyn ControllerPanel>;
}

/// Standalone dialogs and desktop integration reached from the Help menu
pub trait HostServices {
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError>;

    /// `manual` is true when the user asked explicitly
    fn check_for_updates(&self, manual: bool) -> Result<(), CollaboratorError>;

    fn show_about(&self) -> Result<(), CollaboratorError>;
}
