//! Error handling for PlaterKit
//!
//! Provides the error types of the main frame core:
//! - Workspace errors (tab lookup and removal)
//! - Collaborator errors (panels and host services that are missing or failed)
//!
//! None of these are fatal to the process. Callers either recover
//! (veto, skip) or log and degrade.

use thiserror::Error;

/// Workspace error type
///
/// Raised by the workspace container when a tab operation cannot be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// No tab with this identity is open
    #[error("Unknown tab: {tab_id}")]
    UnknownTab {
        /// The raw tab identity.
        tab_id: u32,
    },

    /// The tab is structural and can never be closed
    #[error("Tab '{name}' is pinned and cannot be closed")]
    PinnedTab {
        /// Display name of the pinned tab.
        name: String,
    },

    /// Selection index outside the current tab strip
    #[error("Tab index {index} out of range (tab count {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of open tabs.
        count: usize,
    },
}

/// Collaborator error type
///
/// Represents failures of the external subsystems the frame delegates to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The collaborator has not been constructed yet
    #[error("{name} is not available")]
    Unavailable {
        /// Name of the missing collaborator.
        name: String,
    },

    /// The collaborator ran but reported a failure
    #[error("{name} failed: {reason}")]
    Failed {
        /// Name of the collaborator.
        name: String,
        /// The reason for the failure.
        reason: String,
    },
}

impl CollaboratorError {
    /// Create a failure for the named collaborator
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unavailable error for the named collaborator
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self::Unavailable { name: name.into() }
    }
}

/// Main error type for PlaterKit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Workspace error
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Collaborator error
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Result type for PlaterKit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_error_display() {
        let err = WorkspaceError::UnknownTab { tab_id: 7 };
        assert_eq!(err.to_string(), "Unknown tab: 7");

        let err = WorkspaceError::PinnedTab {
            name: "Plater".to_string(),
        };
        assert_eq!(err.to_string(), "Tab 'Plater' is pinned and cannot be closed");

        let err = WorkspaceError::IndexOutOfRange { index: 4, count: 2 };
        assert_eq!(err.to_string(), "Tab index 4 out of range (tab count 2)");
    }

    #[test]
    fn test_collaborator_error_display() {
        let err = CollaboratorError::unavailable("Plater");
        assert_eq!(err.to_string(), "Plater is not available");

        let err = CollaboratorError::failed("Browser", "no handler for https");
        assert_eq!(err.to_string(), "Browser failed: no handler for https");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = WorkspaceError::UnknownTab { tab_id: 1 }.into();
        assert!(matches!(err, Error::Workspace(_)));
        assert_eq!(err.to_string(), "Unknown tab: 1");

        let err: Error = CollaboratorError::unavailable("Controller").into();
        assert!(matches!(err, Error::Collaborator(_)));
    }
}
