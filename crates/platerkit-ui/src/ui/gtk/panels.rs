//! GTK panels hosted in the workspace notebook.

use gtk4::prelude::*;
use gtk4::{
    Align, ApplicationWindow, Box, ButtonsType, FileChooserAction, FileChooserDialog, Label,
    ListBox, MessageType, Orientation, ResponseType, SelectionMode,
};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::panels::{ControllerPanel, PanelFactory, PlaterPanel, PresetEditor, PresetKind};
use platerkit_settings::SettingsProvider;

const MODEL_EXTENSIONS: [&str; 4] = ["stl", "obj", "amf", "3mf"];

/// Model list shown on the Plater tab
#[derive(Clone)]
pub struct GtkPlater {
    pub widget: Box,
    window: ApplicationWindow,
    list: ListBox,
    models: Rc<RefCell<Vec<PathBuf>>>,
    dirty: Rc<Cell<bool>>,
    prompt: Rc<DiscardPrompt>,
}

impl GtkPlater {
    pub fn new(window: &ApplicationWindow) -> Self {
        let widget = Box::new(Orientation::Vertical, 6);
        widget.set_margin_start(12);
        widget.set_margin_end(12);
        widget.set_margin_top(12);
        widget.set_margin_bottom(12);

        let heading = Label::new(Some("Models"));
        heading.set_halign(Align::Start);
        heading.add_css_class("heading");
        widget.append(&heading);

        let list = ListBox::new();
        list.set_selection_mode(SelectionMode::None);
        list.set_vexpand(true);
        widget.append(&list);

        Self {
            widget,
            window: window.clone(),
            list,
            models: Rc::new(RefCell::new(Vec::new())),
            dirty: Rc::new(Cell::new(false)),
            prompt: Rc::new(DiscardPrompt::default()),
        }
    }

    fn push_model(&self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let row = Label::new(Some(&name));
        row.set_halign(Align::Start);
        self.list.append(&row);
        self.models.borrow_mut().push(path);
        self.dirty.set(true);
    }

    fn rebuild_list(&self) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        let models: Vec<PathBuf> = self.models.borrow_mut().drain(..).collect();
        for path in models {
            self.push_model(path);
        }
    }

    #[allow(deprecated)]
    fn confirm_discard(&self) {
        let dialog = gtk4::MessageDialog::builder()
            .transient_for(&self.window)
            .modal(true)
            .message_type(MessageType::Question)
            .buttons(ButtonsType::None)
            .text("Discard unsaved changes?")
            .secondary_text("The plater holds models that will be lost when the window closes.")
            .build();
        dialog.add_button("Cancel", ResponseType::Cancel);
        dialog.add_button("Discard", ResponseType::Accept);

        let plater = self.clone();
        dialog.connect_response(move |d, response| {
            d.close();
            plater.prompt.finish();
            if response == ResponseType::Accept {
                plater.dirty.set(false);
                plater.window.close();
            }
        });
        dialog.present();
    }
}

impl PlaterPanel for GtkPlater {
    fn name(&self) -> String {
        "Plater".to_string()
    }

    /// Clean plater: true. Otherwise ask asynchronously and refuse this
    /// close; the dialog closes the window again once the user agrees.
    fn prompt_unsaved_changes(&mut self) -> bool {
        if !self.dirty.get() {
            return true;
        }
        if self.prompt.begin() {
            self.confirm_discard();
        } else {
            tracing::debug!("Discard prompt already open");
        }
        false
    }

    #[allow(deprecated)]
    fn add_model(&mut self) {
        let dialog = FileChooserDialog::new(
            Some("Open a model"),
            Some(&self.window),
            FileChooserAction::Open,
            &[
                ("Cancel", ResponseType::Cancel),
                ("Open", ResponseType::Accept),
            ],
        );
        dialog.set_modal(true);

        let filter = gtk4::FileFilter::new();
        filter.set_name(Some("STL/OBJ/AMF/3MF"));
        for ext in MODEL_EXTENSIONS {
            filter.add_pattern(&format!("*.{}", ext));
            filter.add_pattern(&format!("*.{}", ext.to_uppercase()));
        }
        dialog.add_filter(&filter);

        let plater = self.clone();
        dialog.connect_response(move |dialog, response| {
            if response == ResponseType::Accept {
                if let Some(path) = dialog.file().and_then(|file| file.path()) {
                    tracing::info!("Adding model {}", path.display());
                    plater.push_model(path);
                }
            }
            dialog.close();
        });
        dialog.present();
    }

    fn arrange_models(&mut self) {
        self.models
            .borrow_mut()
            .sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        self.rebuild_list();
        tracing::debug!("Arranged {} model(s)", self.models.borrow().len());
    }
}

/// At most one discard dialog is open at a time
#[derive(Debug, Default)]
pub struct DiscardPrompt {
    open: Cell<bool>,
}

impl DiscardPrompt {
    /// Claim the prompt; false while a dialog is already showing
    pub fn begin(&self) -> bool {
        !self.open.replace(true)
    }

    pub fn finish(&self) {
        self.open.set(false);
    }
}

/// Printer host tab
#[derive(Clone)]
pub struct GtkController {
    pub widget: Box,
}

impl GtkController {
    pub fn new() -> Self {
        let widget = Box::new(Orientation::Vertical, 6);
        widget.set_valign(Align::Center);
        widget.append(&Label::new(Some("No printer connected")));
        Self { widget }
    }
}

impl Default for GtkController {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerPanel for GtkController {
    fn name(&self) -> String {
        "Controller".to_string()
    }
}

/// Preset editor tab
#[derive(Clone)]
pub struct GtkPresetEditor {
    pub widget: Box,
    kind: PresetKind,
}

impl GtkPresetEditor {
    pub fn new(kind: PresetKind) -> Self {
        let widget = Box::new(Orientation::Vertical, 6);
        widget.set_margin_start(12);
        widget.set_margin_top(12);
        let heading = Label::new(Some(&kind.to_string()));
        heading.set_halign(Align::Start);
        heading.add_css_class("heading");
        widget.append(&heading);
        Self { widget, kind }
    }
}

impl PresetEditor for GtkPresetEditor {
    fn name(&self) -> String {
        self.kind.to_string()
    }

    fn dispose(&mut self) {
        while let Some(child) = self.widget.first_child() {
            self.widget.remove(&child);
        }
        tracing::debug!("{} editor disposed", self.kind);
    }
}

/// Creates the structural panels and keeps their widgets for the notebook
pub struct GtkPanelFactory {
    window: ApplicationWindow,
    plater: RefCell<Option<GtkPlater>>,
    controller: RefCell<Option<GtkController>>,
}

impl GtkPanelFactory {
    pub fn new(window: &ApplicationWindow) -> Self {
        Self {
            window: window.clone(),
            plater: RefCell::new(None),
            controller: RefCell::new(None),
        }
    }

    pub fn plater_widget(&self) -> Option<gtk4::Widget> {
        self.plater
            .borrow()
            .as_ref()
            .map(|plater| plater.widget.clone().upcast())
    }

    pub fn controller_widget(&self) -> Option<gtk4::Widget> {
        self.controller
            .borrow()
            .as_ref()
            .map(|controller| controller.widget.clone().upcast())
    }
}

impl PanelFactory for GtkPanelFactory {
    fn create_plater(&self, _settings: &dyn SettingsProvider) -> std::boxed::Box<dyn PlaterPanel> {
        let plater = GtkPlater::new(&self.window);
        *self.plater.borrow_mut() = Some(plater.clone());
        std::boxed::Box::new(plater)
    }

    fn create_controller(&self) -> std::boxed::Box<dyn ControllerPanel> {
        let controller = GtkController::new();
        *self.controller.borrow_mut() = Some(controller.clone());
        std::boxed::Box::new(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_prompt_is_not_stacked() {
        let prompt = DiscardPrompt::default();
        assert!(prompt.begin());
        assert!(!prompt.begin());

        prompt.finish();
        assert!(prompt.begin());
    }
}
