use platerkit_core::{Point, Size, WindowGeometry};
use platerkit_settings::{
    Config, GuiSettings, SettingsError, SettingsProvider, MAIN_FRAME_KEY,
};

#[test]
fn test_saved_position_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut settings = GuiSettings::with_file(Config::default(), &path);
    let geometry = WindowGeometry::new(Point::new(120, 80), Size::new(1280, 800)).with_maximized(true);
    settings.save_window_position(MAIN_FRAME_KEY, geometry).unwrap();

    let reloaded = GuiSettings::with_file(Config::load_from_file(&path).unwrap(), &path);
    assert_eq!(
        reloaded.restore_window_position(MAIN_FRAME_KEY).unwrap(),
        Some(geometry)
    );
}

#[test]
fn test_toml_round_trip_keeps_show_host() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.ui.show_host = true;
    config.ui.window_positions.insert(
        MAIN_FRAME_KEY.to_string(),
        WindowGeometry::new(Point::new(0, 0), Size::new(800, 600)),
    );
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_flush_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut settings = GuiSettings::with_file(Config::default(), &path);
    settings
        .save_window_position(
            MAIN_FRAME_KEY,
            WindowGeometry::new(Point::new(5, 5), Size::new(760, 490)),
        )
        .unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_into_unwritable_location_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the write fail.
    let path = dir.path().join("config.json");
    std::fs::create_dir(&path).unwrap();

    let mut settings = GuiSettings::with_file(Config::default(), &path);
    let result = settings.save_window_position(
        MAIN_FRAME_KEY,
        WindowGeometry::new(Point::new(0, 0), Size::new(800, 600)),
    );
    assert!(matches!(result, Err(SettingsError::SaveError(_))));

    // The in-memory value is still updated.
    assert!(settings
        .restore_window_position(MAIN_FRAME_KEY)
        .unwrap()
        .is_some());
}
