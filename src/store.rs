//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::Item;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items in display order
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// The only writers of the item list. Each applies a pure transform from
// `list` and swaps in the resulting list, so no-op operations leave the
// state untouched apart from the swap.

/// Append a new item; blank text leaves the list unchanged
pub fn store_append_item(store: &AppStore, text: &str) {
    let next = list::append(&store.items().get_untracked(), text);
    store.items().set(next);
}

/// Remove an item by id; unknown ids leave the list unchanged
pub fn store_remove_item(store: &AppStore, id: &str) {
    let next = list::remove(&store.items().get_untracked(), id);
    store.items().set(next);
}

/// Move the item at `source` to `destination`; a missing destination
/// leaves the list unchanged
pub fn store_reorder_items(store: &AppStore, source: usize, destination: Option<usize>) {
    let next = list::reorder(&store.items().get_untracked(), source, destination);
    store.items().set(next);
}

/// Replace an item's content by id; unknown ids leave the list unchanged
pub fn store_replace_content(store: &AppStore, id: &str, content: &str) {
    let next = list::replace_content(&store.items().get_untracked(), id, content);
    store.items().set(next);
}
