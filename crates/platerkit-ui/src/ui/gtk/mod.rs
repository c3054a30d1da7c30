//! GTK bindings for the main window model.

pub mod accel;
pub mod frame;
pub mod host;
pub mod panels;

pub use frame::GtkFrame;
