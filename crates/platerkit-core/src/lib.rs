//! # PlaterKit Core
//!
//! Core types, errors, and utilities shared by the PlaterKit crates.
//! Provides the error taxonomy of the main frame, window geometry,
//! single-threaded shared-state aliases and the deferred task queue
//! used to run work after the current UI event completes.

pub mod deferred;
pub mod error;
pub mod geometry;
pub mod types;

pub use deferred::DeferredQueue;
pub use error::{CollaboratorError, Error, Result, WorkspaceError};
pub use geometry::{Point, Size, WindowGeometry};
pub use types::{shared, Shared};
