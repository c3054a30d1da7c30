//! User interface module
//!
//! Toolkit-independent window, workspace and menu models, plus the GTK
//! implementation behind the `gtk` feature.

#[cfg(feature = "gtk")]
pub mod gtk;
pub mod main_window;
pub mod menu;
pub mod panels;
pub mod preset_registry;
pub mod shutdown;
pub mod workspace;
