//! Type aliases for single-threaded UI state.
//!
//! The frame runs entirely on the UI thread, so shared state is
//! `Rc<RefCell<T>>` and never crosses threads.
//!
//! ```rust,ignore
//! use platerkit_core::types::*;
//!
//! // Instead of: Rc<RefCell<MyState>>
//! let state: Shared<MyState> = shared(MyState::default());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// `Shared<dyn Trait>` works through unsized coercion:
/// `let s: Shared<dyn SettingsProvider> = shared(GuiSettings::default());`
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in `Rc<RefCell<_>>`
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
