//! New Item Form Component
//!
//! Input and submit button for appending items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::list;
use crate::store::{store_append_item, use_app_store};

/// Form for appending new items to the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        // Blank input is silently ignored and keeps the buffer
        if list::is_blank(&text) { return; }
        store_append_item(&store, &text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add a new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
