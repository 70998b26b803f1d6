//! Todo Item Component
//!
//! Individual row in the list view.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Item;
use crate::store::{store_remove_item, use_app_store};

/// A single item row with edit and delete triggers
#[component]
pub fn TodoItem(item: Item) -> impl IntoView {
    // Get context from parent
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id.clone();
    let edit_id = item.id.clone();
    let edit_content = item.content.clone();
    let content = item.content.clone();

    view! {
        <div class="item-row">
            // Text
            <span class="item-text">{content}</span>

            <div class="item-actions">
                // Edit button
                <button
                    class="edit-btn"
                    on:click=move |_| ctx.begin_edit(edit_id.clone(), edit_content.clone())
                >
                    "✎"
                </button>

                // Delete button
                <button
                    class="delete-btn"
                    on:click=move |_| store_remove_item(&store, &id)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
