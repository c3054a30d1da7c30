//! Deferred task queue.
//!
//! Work that must run after the current UI event completes is pushed here
//! and drained by the event loop on its next idle pass. Tasks run in FIFO
//! order and cannot be cancelled.

use std::collections::VecDeque;

/// FIFO queue of deferred tasks, owned by the UI thread
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: VecDeque<T>,
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Schedule a task to run after the current event
    pub fn defer(&mut self, task: T) {
        self.pending.push_back(task);
        tracing::trace!("deferred task queued ({} pending)", self.pending.len());
    }

    /// Take every pending task, oldest first
    pub fn drain(&mut self) -> Vec<T> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
