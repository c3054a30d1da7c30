//! Preset editor registry
//!
//! Maps the identity of every open preset editor tab to its editor handle.

use crate::ui::panels::PresetEditor;
use crate::ui::workspace::TabId;
use std::collections::HashMap;

/// Open preset editors keyed by tab identity
#[derive(Default)]
pub struct PresetEditorRegistry {
    editors: HashMap<TabId, Box<dyn PresetEditor>>,
}

impl PresetEditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TabId, editor: Box<dyn PresetEditor>) {
        if let Some(mut previous) = self.editors.insert(id, editor) {
            // Identities are never reused; a collision means the caller reused one.
            tracing::warn!("Replacing preset editor registered for tab {}", id);
            previous.dispose();
        }
    }

    /// Dispose and drop the editor for `id`.
    ///
    /// Returns false when nothing was registered, which callers treat as a
    /// harmless inconsistency.
    pub fn release(&mut self, id: TabId) -> bool {
        match self.editors.remove(&id) {
            Some(mut editor) => {
                tracing::debug!("Disposing preset editor '{}' (tab {})", editor.name(), id);
                editor.dispose();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.editors.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl Drop for PresetEditorRegistry {
    fn drop(&mut self) {
        for (_, mut editor) in self.editors.drain() {
            editor.dispose();
        }
    }
}
