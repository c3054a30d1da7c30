//! Workspace container
//!
//! The tabbed surface of the main frame. Index 0 always holds the Plater,
//! index 1 holds the Controller when `show_host` was set at startup, and
//! preset editor tabs are appended after them.
//!
//! Closability is derived from the selection: only the active tab is
//! re-evaluated, and only tabs past the structural ones may be closed.

use crate::ui::panels::{ControllerPanel, PanelFactory, PanelKind, PlaterPanel, PresetEditor, PresetKind};
use crate::ui::preset_registry::PresetEditorRegistry;
use platerkit_core::{DeferredQueue, WorkspaceError};
use platerkit_settings::SettingsProvider;

/// Stable identity of a tab, unique for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u32);

impl TabId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One hosted panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: TabId,
    name: String,
    kind: PanelKind,
}

impl Tab {
    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }
}

/// Work queued to run after the current UI event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    SelectTab(usize),
}

/// Result of a successful tab close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedTab {
    pub tab: Tab,
    /// Position the tab occupied before removal
    pub index: usize,
    /// Whether a preset editor was disposed with it
    pub editor_released: bool,
}

/// Result of opening (or re-focusing) a preset editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTab {
    pub id: TabId,
    pub index: usize,
    /// False when an editor of this kind was already open and got selected
    pub opened: bool,
}

/// Whether the tab at `index` may be closed while it is active.
///
/// Index 0 (Plater) never is; index 1 only when no Controller is
/// configured; everything after is.
pub fn closable_at(index: usize, show_host: bool) -> bool {
    if index > 1 {
        true
    } else {
        index == 1 && !show_host
    }
}

/// Tabs, panels and preset editors of the main frame
pub struct WorkspaceContainer {
    tabs: Vec<Tab>,
    plater: Option<Box<dyn PlaterPanel>>,
    controller: Option<Box<dyn ControllerPanel>>,
    presets: PresetEditorRegistry,
    show_host: bool,
    selected: usize,
    active_closable: bool,
    next_id: u32,
    deferred: DeferredQueue<DeferredAction>,
}

impl WorkspaceContainer {
    /// Build the structural tabs.
    ///
    /// `show_host` is read here once; later changes need a restart.
    pub fn initialize(settings: &dyn SettingsProvider, factory: &dyn PanelFactory) -> Self {
        let show_host = settings.show_host();
        let mut workspace = Self {
            tabs: Vec::new(),
            plater: None,
            controller: None,
            presets: PresetEditorRegistry::new(),
            show_host,
            selected: 0,
            active_closable: false,
            next_id: 1,
            deferred: DeferredQueue::new(),
        };

        let plater = factory.create_plater(settings);
        workspace.push_tab(plater.name(), PanelKind::Plater);
        workspace.plater = Some(plater);

        if show_host {
            let controller = factory.create_controller();
            workspace.push_tab(controller.name(), PanelKind::Controller);
            workspace.controller = Some(controller);
        }

        workspace.active_closable = closable_at(0, show_host);
        tracing::info!(
            "Workspace initialized with {} tab(s) (show_host={})",
            workspace.tabs.len(),
            show_host
        );
        workspace
    }

    fn push_tab(&mut self, name: String, kind: PanelKind) -> (TabId, usize) {
        let id = TabId::new(self.next_id);
        self.next_id += 1;
        self.tabs.push(Tab { id, name, kind });
        (id, self.tabs.len() - 1)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn show_host(&self) -> bool {
        self.show_host
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Closability of the currently selected tab
    pub fn active_tab_closable(&self) -> bool {
        self.active_closable
    }

    pub fn plater(&self) -> Option<&dyn PlaterPanel> {
        self.plater.as_deref()
    }

    pub fn plater_mut(&mut self) -> Option<&mut (dyn PlaterPanel + 'static)> {
        self.plater.as_deref_mut()
    }

    pub fn controller(&self) -> Option<&dyn ControllerPanel> {
        self.controller.as_deref()
    }

    pub fn preset_editors(&self) -> &PresetEditorRegistry {
        &self.presets
    }

    /// Toolkit notification that the active tab changed.
    ///
    /// Returns the closability of the newly active tab.
    pub fn on_selection_changed(&mut self, index: usize) -> Result<bool, WorkspaceError> {
        if index >= self.tabs.len() {
            return Err(WorkspaceError::IndexOutOfRange {
                index,
                count: self.tabs.len(),
            });
        }

        self.selected = index;
        self.active_closable = closable_at(index, self.show_host);
        tracing::debug!(
            "Selected tab {} ({}), closable={}",
            index,
            self.tabs[index].name,
            self.active_closable
        );
        Ok(self.active_closable)
    }

    /// Open an editor for `kind`, or select the one already open.
    ///
    /// `create` only runs when a new tab is needed.
    pub fn open_preset_editor<F>(&mut self, kind: PresetKind, create: F) -> PresetTab
    where
        F: FnOnce() -> Box<dyn PresetEditor>,
    {
        let existing = self
            .tabs
            .iter()
            .position(|tab| tab.kind == PanelKind::PresetEditor(kind));

        let (id, index, opened) = match existing {
            Some(index) => (self.tabs[index].id, index, false),
            None => {
                let editor = create();
                let (id, index) = self.push_tab(editor.name(), PanelKind::PresetEditor(kind));
                self.presets.insert(id, editor);
                tracing::info!("Opened {} tab {}", kind, id);
                (id, index, true)
            }
        };

        self.selected = index;
        self.active_closable = closable_at(index, self.show_host);
        PresetTab { id, index, opened }
    }

    /// Toolkit notification that the user asked to close a tab.
    ///
    /// Preset editors are disposed before the tab is removed. Selection
    /// returns to the Plater once deferred work runs.
    pub fn on_tab_close_requested(&mut self, id: TabId) -> Result<ClosedTab, WorkspaceError> {
        let index = self
            .index_of(id)
            .ok_or(WorkspaceError::UnknownTab { tab_id: id.raw() })?;

        let kind = self.tabs[index].kind;
        if matches!(kind, PanelKind::Plater | PanelKind::Controller) {
            return Err(WorkspaceError::PinnedTab {
                name: self.tabs[index].name.clone(),
            });
        }

        let mut editor_released = false;
        if kind.is_preset_editor() {
            editor_released = self.presets.release(id);
            if !editor_released {
                tracing::warn!("No preset editor registered for tab {}", id);
            }
        }

        let tab = self.tabs.remove(index);
        if self.selected >= self.tabs.len() || self.selected > index {
            self.selected = self.selected.saturating_sub(1);
        }
        self.active_closable = closable_at(self.selected, self.show_host);
        self.deferred.defer(DeferredAction::SelectTab(0));

        tracing::info!("Closed tab {} ({})", tab.id, tab.name);
        Ok(ClosedTab {
            tab,
            index,
            editor_released,
        })
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Run queued work and return it so the toolkit can mirror it
    pub fn run_deferred(&mut self) -> Vec<DeferredAction> {
        let actions = self.deferred.drain();
        for action in &actions {
            match *action {
                DeferredAction::SelectTab(index) => {
                    if let Err(e) = self.on_selection_changed(index) {
                        tracing::warn!("Deferred selection skipped: {}", e);
                    }
                }
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platerkit_settings::GuiSettings;

    struct Plater;

    impl PlaterPanel for Plater {
        fn name(&self) -> String {
            "Plater".to_string()
        }

        fn prompt_unsaved_changes(&mut self) -> bool {
            true
        }

        fn add_model(&mut self) {}

        fn arrange_models(&mut self) {}
    }

    struct Controller;

    impl ControllerPanel for Controller {
        fn name(&self) -> String {
            "Controller".to_string()
        }
    }

    struct Factory;

    impl PanelFactory for Factory {
        fn create_plater(&self, _settings: &dyn SettingsProvider) -> Box<dyn PlaterPanel> {
            Box::new(Plater)
        }

        fn create_controller(&self) -> Box<dyn ControllerPanel> {
            Box::new(Controller)
        }
    }

    struct Editor;

    impl PresetEditor for Editor {
        fn name(&self) -> String {
            "Print Settings".to_string()
        }

        fn dispose(&mut self) {}
    }

    #[test]
    fn test_close_without_registry_entry_still_removes_tab() {
        let mut workspace = WorkspaceContainer::initialize(&GuiSettings::default(), &Factory);
        let tab = workspace.open_preset_editor(PresetKind::Print, || Box::new(Editor));
        assert!(workspace.presets.release(tab.id));

        let closed = workspace.on_tab_close_requested(tab.id).unwrap();
        assert!(!closed.editor_released);
        assert_eq!(closed.tab.kind(), PanelKind::PresetEditor(PresetKind::Print));
        assert_eq!(workspace.len(), 1);
        assert!(workspace.index_of(tab.id).is_none());
        assert_eq!(workspace.run_deferred(), [DeferredAction::SelectTab(0)]);
        assert_eq!(workspace.selected_index(), 0);
    }

    #[test]
    fn test_closable_at_structural_indices() {
        assert!(!closable_at(0, false));
        assert!(!closable_at(0, true));
        assert!(closable_at(1, false));
        assert!(!closable_at(1, true));
    }

    #[test]
    fn test_closable_at_dynamic_indices() {
        for index in 2..64 {
            assert!(closable_at(index, false));
            assert!(closable_at(index, true));
        }
    }

    #[test]
    fn test_tab_id_display() {
        assert_eq!(TabId::new(12).to_string(), "#12");
        assert_eq!(TabId::new(12).raw(), 12);
    }
}
