//! Todo List View Component
//!
//! Displays items in display order with drag-to-reorder support.
//! Uses leptos-listdnd with explicit DropZones between rows.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{store_reorder_items, use_app_store, AppStateStoreFields};

use leptos_listdnd::*;

/// List view component with DnD support
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |source, destination| {
        web_sys::console::log_1(&format!("[DND] Drop: source={}, destination={}", source, destination).into());
        store_reorder_items(&store, source, Some(destination));
    });

    let rows = move || store.items().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="list-view">
            // Insertion slot above the first row
            <DropZone dnd=dnd slot=0 />

            <For
                each=rows
                // Key on everything the row renders so edits re-render it
                key=|(index, item)| (*index, item.id.clone(), item.content.clone())
                children=move |(index, item)| {
                    // DnD handlers - use unified make_on_mousedown
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_row_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    // Visual state
                    let is_dragging = move || dnd.dragging_index_read.get() == Some(index);

                    let row_class = move || {
                        let mut c = String::from("item-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        c
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <TodoItem item=item />
                        </div>

                        // Insertion slot below this row
                        <DropZone dnd=dnd slot=index + 1 />
                    }
                }
            />
        </div>
    }
}

/// Drop zone component - a horizontal separator between rows
#[component]
pub fn DropZone(dnd: DndSignals, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this slot the current drop target?
    let is_active = move || dnd.drop_slot_read.get() == Some(slot);

    // Only show when dragging
    let is_dragging = move || dnd.dragging_index_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
