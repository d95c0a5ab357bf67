use std::cell::{Cell, RefCell};

use super::Observer;

/// Observer that records every event for later inspection.
#[derive(Debug, Default)]
pub(super) struct RecordingObserver {
    ticks: Cell<usize>,
    traces: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn ticks(&self) -> usize {
        self.ticks.get()
    }

    pub(super) fn traces(&self) -> Vec<String> {
        self.traces.borrow().clone()
    }

    /// Returns whether any recorded trace contains `needle`.
    pub(super) fn traced(&self, needle: &str) -> bool {
        self.traces.borrow().iter().any(|t| t.contains(needle))
    }
}

impl Observer for RecordingObserver {
    fn on_iteration_tick(&self) {
        self.ticks.set(self.ticks.get() + 1);
    }

    fn on_trace(&self, message: &str) {
        self.traces.borrow_mut().push(message.to_owned());
    }
}
