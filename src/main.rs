// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use platerkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!("PlaterKit {} (built {})", platerkit::VERSION, platerkit::BUILD_DATE);
    platerkit_ui::gtk_app::main()
}
