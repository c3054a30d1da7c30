#![allow(dead_code)]

use platerkit_core::{shared, CollaboratorError, Shared, WindowGeometry};
use platerkit_settings::{SettingsError, SettingsProvider, SettingsResult};
use platerkit_ui::{
    ControllerPanel, HostServices, MainWindow, MainWindowOptions, PanelFactory, PlaterPanel,
    PresetEditor,
};

pub type Log = Shared<Vec<String>>;

pub fn log() -> Log {
    shared(Vec::new())
}

pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

pub struct FakePlater {
    pub log: Log,
    pub answer: bool,
}

impl PlaterPanel for FakePlater {
    fn name(&self) -> String {
        "Plater".to_string()
    }

    fn prompt_unsaved_changes(&mut self) -> bool {
        self.log.borrow_mut().push("prompt".to_string());
        self.answer
    }

    fn add_model(&mut self) {
        self.log.borrow_mut().push("add_model".to_string());
    }

    fn arrange_models(&mut self) {
        self.log.borrow_mut().push("arrange_models".to_string());
    }
}

pub struct FakeController;

impl ControllerPanel for FakeController {
    fn name(&self) -> String {
        "Controller".to_string()
    }
}

pub struct FakeEditor {
    pub log: Log,
    pub name: String,
}

impl PresetEditor for FakeEditor {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().push(format!("dispose {}", self.name));
    }
}

pub fn editor(log: &Log, name: &str) -> Box<dyn PresetEditor> {
    Box::new(FakeEditor {
        log: log.clone(),
        name: name.to_string(),
    })
}

pub struct FakeFactory {
    pub log: Log,
    pub answer: bool,
}

impl FakeFactory {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            answer: true,
        }
    }

    pub fn answering(log: &Log, answer: bool) -> Self {
        Self {
            log: log.clone(),
            answer,
        }
    }
}

impl PanelFactory for FakeFactory {
    fn create_plater(&self, _settings: &dyn SettingsProvider) -> Box<dyn PlaterPanel> {
        self.log.borrow_mut().push("create_plater".to_string());
        Box::new(FakePlater {
            log: self.log.clone(),
            answer: self.answer,
        })
    }

    fn create_controller(&self) -> Box<dyn ControllerPanel> {
        self.log.borrow_mut().push("create_controller".to_string());
        Box::new(FakeController)
    }
}

pub struct FakeHost {
    pub log: Log,
    pub fail: bool,
}

impl FakeHost {
    fn record(&self, entry: String) -> Result<(), CollaboratorError> {
        self.log.borrow_mut().push(entry);
        if self.fail {
            Err(CollaboratorError::unavailable("Browser"))
        } else {
            Ok(())
        }
    }
}

impl HostServices for FakeHost {
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError> {
        self.record(format!("open_url {}", url))
    }

    fn check_for_updates(&self, manual: bool) -> Result<(), CollaboratorError> {
        self.record(format!("check_for_updates manual={}", manual))
    }

    fn show_about(&self) -> Result<(), CollaboratorError> {
        self.record("show_about".to_string())
    }
}

/// Settings double that records every save
#[derive(Default)]
pub struct RecordingSettings {
    pub show_host: bool,
    pub stored: Option<WindowGeometry>,
    pub saves: Vec<(String, WindowGeometry)>,
    pub fail_save: bool,
}

impl RecordingSettings {
    pub fn with_host(show_host: bool) -> Self {
        Self {
            show_host,
            ..Self::default()
        }
    }
}

impl SettingsProvider for RecordingSettings {
    fn show_host(&self) -> bool {
        self.show_host
    }

    fn restore_window_position(&self, _key: &str) -> SettingsResult<Option<WindowGeometry>> {
        Ok(self.stored)
    }

    fn save_window_position(&mut self, key: &str, geometry: WindowGeometry) -> SettingsResult<()> {
        if self.fail_save {
            return Err(SettingsError::SaveError("disk full".to_string()));
        }
        self.saves.push((key.to_string(), geometry));
        Ok(())
    }

    fn website_url(&self) -> String {
        "http://www.slic3r.org".to_string()
    }

    fn manual_url(&self) -> String {
        "http://manual.slic3r.org/".to_string()
    }

    fn updates_url(&self) -> String {
        "https://github.com/slic3r/Slic3r/releases".to_string()
    }
}

/// A window over recording fakes; the settings handle stays inspectable
pub struct Harness {
    pub window: MainWindow,
    pub settings: Shared<RecordingSettings>,
    pub log: Log,
}

pub fn harness(settings: RecordingSettings, answer: bool, host_fails: bool) -> Harness {
    let log = log();
    let settings = shared(settings);
    let provider: Shared<dyn SettingsProvider> = settings.clone();
    let window = MainWindow::new(
        MainWindowOptions {
            version: "1.3.0".to_string(),
            ..MainWindowOptions::default()
        },
        provider,
        &FakeFactory::answering(&log, answer),
        Box::new(FakeHost {
            log: log.clone(),
            fail: host_fails,
        }),
    );
    Harness {
        window,
        settings,
        log,
    }
}
