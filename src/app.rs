//! To-Do Frontend App
//!
//! Top-level component owning the list store and edit-session state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditModal, EditTarget, NewItemForm, TodoListView};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for the item list
    let store = Store::new(AppState::default());
    provide_context(store);

    // Edit session state (None = modal closed)
    let (editing, set_editing) = signal::<Option<EditTarget>>(None);

    // Provide context to all children
    provide_context(AppContext::new((editing, set_editing)));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"To-Do List"</h1>

                <NewItemForm />

                <TodoListView />

                <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>
            </main>
        </div>

        // Modal overlay, shown only while editing
        <EditModal editing=editing />
    }
}
