//! Edit Modal Component
//!
//! Overlay for editing an item's text through a draft buffer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::EditTarget;
use crate::context::AppContext;
use crate::store::{store_replace_content, use_app_store};

/// Modal editor for the item named by the current edit target
#[component]
pub fn EditModal(editing: ReadSignal<Option<EditTarget>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Draft buffer, seeded from the target when the modal opens
    let (draft, set_draft) = signal(String::new());

    // Track which target seeded the draft so reruns don't clobber edits
    let (last_target_id, set_last_target_id) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        if let Some(target) = editing.get() {
            if last_target_id.get_untracked().as_deref() != Some(target.id.as_str()) {
                set_draft.set(target.content.clone());
                set_last_target_id.set(Some(target.id.clone()));
            }
        } else {
            set_last_target_id.set(None);
        }
    });

    // Commit the draft and close. If the item was deleted while the
    // modal was open, the replace is a no-op and the modal still closes.
    let save_edit = move || {
        if let Some(target) = editing.get_untracked() {
            store_replace_content(&store, &target.id, &draft.get_untracked());
        }
        ctx.close_editor();
    };

    view! {
        {move || match editing.get() {
            Some(_) => view! {
                <div class="modal-background">
                    <div class="modal-container">
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || draft.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_draft.set(input.value());
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    save_edit();
                                } else if ev.key() == "Escape" {
                                    ev.prevent_default();
                                    ctx.close_editor();
                                }
                            }
                        />
                        <button class="save-btn" on:click=move |_| save_edit()>"OK"</button>
                        <button class="close-btn" on:click=move |_| ctx.close_editor()>"×"</button>
                    </div>
                </div>
            }.into_any(),
            None => view! { <div></div> }.into_any(),
        }}
    }
}
