//! UI state managed via Dioxus context.
//!
//! The dashboard pipeline keeps its own retained `Screen`; `UiState` only
//! carries what Dioxus needs to react to it. Child components retrieve it
//! with `use_context::<UiState>()`.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct UiState {
    /// Bumped on every screen update so dependent components re-render
    pub revision: Signal<u64>,
    /// Current contents of the city input
    pub city: Signal<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            revision: Signal::new(0),
            city: Signal::new(String::new()),
        }
    }

    /// Mark the screen as changed.
    pub fn bump(mut self) {
        let next = *self.revision.peek() + 1;
        self.revision.set(next);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
