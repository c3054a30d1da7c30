//! Shutdown coordinator
//!
//! Gates the window close on the Plater's unsaved-changes prompt and saves
//! the window placement before the toolkit tears the window down.

use crate::ui::panels::PlaterPanel;
use platerkit_core::WindowGeometry;
use platerkit_settings::{SettingsProvider, MAIN_FRAME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownState {
    Open,
    /// Terminal: the close was allowed and teardown is under way
    Closing,
}

/// A close request from the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseRequest {
    pub can_veto: bool,
}

impl CloseRequest {
    /// User-initiated close that may be refused
    pub fn vetoable() -> Self {
        Self { can_veto: true }
    }

    /// Session end or similar; must go through
    pub fn forced() -> Self {
        Self { can_veto: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Keep the window open
    Veto,
    /// Let the close propagate
    Proceed,
}

#[derive(Debug)]
pub struct ShutdownCoordinator {
    state: ShutdownState,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            state: ShutdownState::Open,
        }
    }

    pub fn state(&self) -> ShutdownState {
        self.state
    }

    /// Decide a close request.
    ///
    /// A missing Plater counts as a refused prompt. Failing to save the
    /// geometry is logged and does not block the close.
    pub fn on_close_request(
        &mut self,
        request: CloseRequest,
        plater: Option<&mut (dyn PlaterPanel + 'static)>,
        settings: &mut dyn SettingsProvider,
        geometry: WindowGeometry,
    ) -> CloseDecision {
        if self.state == ShutdownState::Closing {
            return CloseDecision::Proceed;
        }

        if request.can_veto {
            let confirmed = match plater {
                Some(plater) => plater.prompt_unsaved_changes(),
                None => {
                    tracing::warn!("Close requested before the plater exists; keeping window open");
                    false
                }
            };
            if !confirmed {
                tracing::info!("Close vetoed: unsaved changes kept");
                return CloseDecision::Veto;
            }
        }

        if let Err(e) = settings.save_window_position(MAIN_FRAME_KEY, geometry) {
            tracing::warn!("Failed to save window position: {}", e);
        }

        self.state = ShutdownState::Closing;
        tracing::info!("Main window closing (forced={})", !request.can_veto);
        CloseDecision::Proceed
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
