//! Application Context
//!
//! Edit-session signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::EditTarget;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Item currently open in the edit modal (None = modal closed) - read
    pub editing: ReadSignal<Option<EditTarget>>,
    /// Item currently open in the edit modal - write
    set_editing: WriteSignal<Option<EditTarget>>,
}

impl AppContext {
    pub fn new(editing: (ReadSignal<Option<EditTarget>>, WriteSignal<Option<EditTarget>>)) -> Self {
        Self {
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Open the edit modal for an item
    pub fn begin_edit(&self, id: String, content: String) {
        self.set_editing.set(Some(EditTarget { id, content }));
    }

    /// Close the edit modal, discarding the edit session
    pub fn close_editor(&self) {
        self.set_editing.set(None);
    }
}
