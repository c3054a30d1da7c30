//! GTK main frame.
//!
//! Mirrors `MainWindow` onto an `ApplicationWindow` with a menu bar, a
//! notebook and a status line. Notebook page order always matches the
//! workspace tab order.

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Button, Label, Notebook, Orientation, PopoverMenuBar};
use libadwaita::Application as AdwApplication;
use std::cell::RefCell;
use std::rc::Rc;

use super::accel::{gtk_accelerator, gtk_mnemonic};
use super::host::GtkHost;
use super::panels::{GtkPanelFactory, GtkPresetEditor};
use crate::ui::main_window::{MainWindow, MainWindowOptions, MIN_SIZE};
use crate::ui::menu::MenuBar;
use crate::ui::panels::{PanelKind, PresetKind};
use crate::ui::shutdown::{CloseDecision, CloseRequest, ShutdownState};
use crate::ui::workspace::{DeferredAction, TabId};
use platerkit_core::{Shared, Size};
use platerkit_settings::{GuiSettings, SettingsProvider};

struct TabPage {
    id: TabId,
    child: gtk4::Widget,
    close_button: Button,
}

struct FrameInner {
    window: ApplicationWindow,
    notebook: Notebook,
    status: Label,
    model: RefCell<MainWindow>,
    pages: RefCell<Vec<TabPage>>,
}

/// Top-level window of the application.
///
/// Preset editors open from the toolbar above the notebook or with
/// `Ctrl+2` (print), `Ctrl+3` (filament) and `Ctrl+4` (printer); opening a
/// kind that is already open selects its tab.
#[derive(Clone)]
pub struct GtkFrame {
    inner: Rc<FrameInner>,
}

impl GtkFrame {
    pub fn new(app: &AdwApplication, settings: Shared<GuiSettings>, version: &str) -> Self {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("PlaterKit")
            .build();
        window.set_size_request(MIN_SIZE.width as i32, MIN_SIZE.height as i32);

        let (website_url, updates_url) = {
            let settings = settings.borrow();
            (settings.website_url(), settings.updates_url())
        };
        let host = GtkHost::new(&window, website_url, updates_url, version);
        let factory = GtkPanelFactory::new(&window);

        let provider: Shared<dyn SettingsProvider> = settings;
        let options = MainWindowOptions {
            version: version.to_string(),
            ..MainWindowOptions::default()
        };
        let model = MainWindow::new(options, provider, &factory, Box::new(host));

        window.set_title(Some(model.title()));
        let size = model.size();
        window.set_default_size(size.width as i32, size.height as i32);
        if model.is_maximized() {
            window.maximize();
        }

        let notebook = Notebook::new();
        notebook.set_scrollable(true);
        notebook.set_vexpand(true);

        let status = Label::new(Some(model.status_bar().text()));
        status.set_halign(gtk4::Align::Start);
        status.set_margin_start(6);
        status.set_margin_top(2);
        status.set_margin_bottom(2);
        status.add_css_class("dim-label");

        let menu_bar = PopoverMenuBar::from_model(Some(&gio_menu(model.menu_bar())));

        let main_box = gtk4::Box::new(Orientation::Vertical, 0);
        main_box.append(&menu_bar);
        main_box.append(&preset_toolbar());
        main_box.append(&notebook);
        main_box.append(&status);
        window.set_child(Some(&main_box));

        let frame = Self {
            inner: Rc::new(FrameInner {
                window,
                notebook,
                status,
                model: RefCell::new(model),
                pages: RefCell::new(Vec::new()),
            }),
        };

        frame.add_structural_pages(&factory);
        frame.connect_notebook();
        frame.connect_close_request();
        frame.register_actions(app);
        frame.refresh_close_buttons();
        frame
    }

    pub fn present(&self) {
        self.inner.window.present();
    }

    fn add_structural_pages(&self, factory: &GtkPanelFactory) {
        let tabs: Vec<(TabId, String, bool)> = {
            let model = self.inner.model.borrow();
            model
                .workspace()
                .tabs()
                .iter()
                .map(|tab| {
                    (
                        tab.id(),
                        tab.name().to_string(),
                        tab.kind() == PanelKind::Plater,
                    )
                })
                .collect()
        };

        for (id, name, is_plater) in tabs {
            let child = if is_plater {
                factory.plater_widget()
            } else {
                factory.controller_widget()
            };
            match child {
                Some(child) => self.append_page(id, &name, child),
                None => tracing::warn!("No widget for tab '{}'", name),
            }
        }
    }

    fn append_page(&self, id: TabId, name: &str, child: gtk4::Widget) {
        let label_box = gtk4::Box::new(Orientation::Horizontal, 4);
        label_box.append(&Label::new(Some(name)));

        let close_button = Button::from_icon_name("window-close-symbolic");
        close_button.add_css_class("flat");
        close_button.set_visible(false);
        label_box.append(&close_button);

        let frame = self.clone();
        close_button.connect_clicked(move |_| frame.close_tab(id));

        self.inner.notebook.append_page(&child, Some(&label_box));
        self.inner.pages.borrow_mut().push(TabPage {
            id,
            child,
            close_button,
        });
    }

    fn connect_notebook(&self) {
        let frame = self.clone();
        self.inner
            .notebook
            .connect_switch_page(move |_, _, page_num| frame.on_switch_page(page_num as usize));
    }

    fn on_switch_page(&self, index: usize) {
        let closable = match self.inner.model.try_borrow_mut() {
            Ok(mut model) => model.on_selection_changed(index),
            Err(_) => {
                tracing::debug!("Page switch during model update, ignored");
                return;
            }
        };
        self.show_close_button(index, closable);
    }

    /// Only the active tab can show a close control
    fn show_close_button(&self, active: usize, closable: bool) {
        for (index, page) in self.inner.pages.borrow().iter().enumerate() {
            page.close_button.set_visible(index == active && closable);
        }
    }

    fn refresh_close_buttons(&self) {
        let (active, closable) = {
            let model = self.inner.model.borrow();
            let workspace = model.workspace();
            (workspace.selected_index(), workspace.active_tab_closable())
        };
        self.show_close_button(active, closable);
    }

    fn close_tab(&self, id: TabId) {
        let closed = self.inner.model.borrow_mut().on_tab_close_requested(id);
        let Some(closed) = closed else {
            return;
        };

        let page = {
            let mut pages = self.inner.pages.borrow_mut();
            match pages.iter().position(|page| page.id == id) {
                Some(position) => pages.remove(position),
                None => {
                    tracing::warn!("Tab {} had no notebook page", closed.tab.id());
                    return;
                }
            }
        };
        if let Some(page_num) = self.inner.notebook.page_num(&page.child) {
            self.inner.notebook.remove_page(Some(page_num));
        }

        let frame = self.clone();
        glib::idle_add_local_once(move || frame.run_deferred());
    }

    fn run_deferred(&self) {
        let actions = self.inner.model.borrow_mut().run_deferred();
        for action in actions {
            match action {
                DeferredAction::SelectTab(index) => {
                    self.inner.notebook.set_current_page(Some(index as u32));
                }
            }
        }
        self.refresh_close_buttons();
    }

    pub fn open_preset_editor(&self, kind: PresetKind) {
        let mut created: Option<GtkPresetEditor> = None;
        let tab = self.inner.model.borrow_mut().open_preset_editor(kind, || {
            let editor = GtkPresetEditor::new(kind);
            created = Some(editor.clone());
            Box::new(editor)
        });

        if let Some(editor) = created {
            self.append_page(tab.id, &kind.to_string(), editor.widget.upcast());
        }
        self.inner.notebook.set_current_page(Some(tab.index as u32));
        self.refresh_close_buttons();
    }

    fn connect_close_request(&self) {
        let frame = self.clone();
        self.inner.window.connect_close_request(move |window| {
            let (width, height) = window.default_size();
            let decision = {
                let mut model = frame.inner.model.borrow_mut();
                let position = model.position();
                if width > 0 && height > 0 {
                    model.set_geometry(position, Size::new(width as u32, height as u32));
                }
                model.set_maximized(window.is_maximized());
                model.on_close_request(CloseRequest::vetoable())
            };
            match decision {
                CloseDecision::Veto => glib::Propagation::Stop,
                CloseDecision::Proceed => glib::Propagation::Proceed,
            }
        });
    }

    fn on_forced_shutdown(&self) {
        let Ok(mut model) = self.inner.model.try_borrow_mut() else {
            return;
        };
        if model.shutdown_state() == ShutdownState::Open {
            model.on_close_request(CloseRequest::forced());
        }
    }

    fn register_actions(&self, app: &AdwApplication) {
        let items: Vec<_> = {
            let model = self.inner.model.borrow();
            model
                .menu_bar()
                .items()
                .map(|item| (item.action, item.accelerator.clone(), item.enabled))
                .collect()
        };

        for (menu_action, accelerator, enabled) in items {
            let action = gio::SimpleAction::new(menu_action.id(), None);
            action.set_enabled(enabled);
            let frame = self.clone();
            action.connect_activate(move |_, _| {
                let text = {
                    let mut model = frame.inner.model.borrow_mut();
                    model.activate(menu_action);
                    model.status_bar().text().to_string()
                };
                frame.inner.status.set_text(&text);
            });
            app.add_action(&action);

            if let Some(accelerator) = accelerator {
                let detailed = format!("app.{}", menu_action.id());
                app.set_accels_for_action(&detailed, &[gtk_accelerator(&accelerator).as_str()]);
            }
        }

        for (slot, kind) in PresetKind::ALL.into_iter().enumerate() {
            let name = preset_action(kind);
            let action = gio::SimpleAction::new(&name, None);
            let frame = self.clone();
            action.connect_activate(move |_, _| frame.open_preset_editor(kind));
            app.add_action(&action);
            let accel = format!("<Control>{}", slot + 2);
            app.set_accels_for_action(&format!("app.{}", name), &[accel.as_str()]);
        }

        let frame = self.clone();
        app.connect_shutdown(move |_| frame.on_forced_shutdown());
    }
}

fn preset_action(kind: PresetKind) -> String {
    format!("preset_{}", kind.id())
}

fn preset_toolbar() -> gtk4::Box {
    let toolbar = gtk4::Box::new(Orientation::Horizontal, 4);
    toolbar.set_margin_start(6);
    toolbar.set_margin_top(2);
    toolbar.set_margin_bottom(2);
    for (slot, kind) in PresetKind::ALL.into_iter().enumerate() {
        let button = Button::with_label(&kind.to_string());
        button.add_css_class("flat");
        button.set_action_name(Some(&format!("app.{}", preset_action(kind))));
        button.set_tooltip_text(Some(&format!("Open {} (Ctrl+{})", kind, slot + 2)));
        toolbar.append(&button);
    }
    toolbar
}

fn gio_menu(bar: &MenuBar) -> gio::Menu {
    let root = gio::Menu::new();
    for menu in bar.menus() {
        let submenu = gio::Menu::new();
        for item in &menu.items {
            let detailed = format!("app.{}", item.action.id());
            submenu.append(Some(&gtk_mnemonic(&item.label)), Some(&detailed));
        }
        root.append_submenu(Some(&gtk_mnemonic(&menu.label)), &submenu);
    }
    root
}
