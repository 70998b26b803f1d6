//! Leptos List DnD Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Insertion point between rows: slot `i` inserts before the row at
/// index `i`, slot `len` inserts after the last row.
pub type Slot = usize;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    pub drop_slot_read: ReadSignal<Option<Slot>>,
    pub drop_slot_write: WriteSignal<Option<Slot>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (drop_slot_read, drop_slot_write) = signal(None::<Slot>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_index_read,
        dragging_index_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Final index of the row from `source` after a drop on `slot`,
/// accounting for the dragged row being extracted first.
pub fn destination_for_slot(source: usize, slot: Slot) -> usize {
    if slot > source {
        slot - 1
    } else {
        slot
    }
}

/// Slot targeted while hovering the row at `index`: the dragged row takes
/// that row's place. Hovering the dragged row itself targets nothing.
pub fn slot_for_row(dragging: usize, index: usize) -> Option<Slot> {
    if index == dragging {
        None
    } else if index < dragging {
        Some(index)
    } else {
        Some(index + 1)
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_index_write.set(None);
    dnd.drop_slot_write.set(None);
    dnd.pending_index_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_index_write.set(Some(index));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_index_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_index_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_index_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (take that row's place)
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_index_read.get_untracked() {
            dnd.drop_slot_write.set(slot_for_row(dragging, index));
        }
    }
}

/// Create mouseenter handler for slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: Slot) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_reorder: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_index_read.get_untracked();
        let slot = dnd.drop_slot_read.get_untracked();

        // Clear pending state first
        dnd.pending_index_write.set(None);

        // If we were actually dragging (not just clicking) and released
        // over a live slot
        if let (Some(source), Some(slot)) = (dragging, slot) {
            end_drag(&dnd);
            on_reorder(source, destination_for_slot(source, slot));
        } else {
            // Released outside any slot - reset without reordering
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_for_slot_before_source() {
        // Dropping on a slot at or before the source keeps the slot index
        assert_eq!(destination_for_slot(2, 0), 0);
        assert_eq!(destination_for_slot(2, 2), 2);
    }

    #[test]
    fn test_destination_for_slot_after_source() {
        // Slots past the source shift down by one after extraction
        assert_eq!(destination_for_slot(0, 3), 2);
        assert_eq!(destination_for_slot(1, 2), 1);
    }

    #[test]
    fn test_adjacent_slots_are_identity() {
        // The slots on either side of the source both resolve to the
        // source index itself
        assert_eq!(destination_for_slot(1, 1), 1);
        assert_eq!(destination_for_slot(1, 2), 1);
    }

    #[test]
    fn test_slot_for_row_above_and_below() {
        assert_eq!(slot_for_row(2, 0), Some(0));
        assert_eq!(slot_for_row(2, 1), Some(1));
        assert_eq!(slot_for_row(0, 1), Some(2));
        assert_eq!(slot_for_row(0, 2), Some(3));
    }

    #[test]
    fn test_slot_for_row_over_self_is_none() {
        assert_eq!(slot_for_row(1, 1), None);
    }

    #[test]
    fn test_row_hover_matches_taking_that_rows_place() {
        // Dragging row 0 over row 2 should land it at index 2
        let slot = slot_for_row(0, 2).unwrap();
        assert_eq!(destination_for_slot(0, slot), 2);
        // Dragging row 2 over row 0 should land it at index 0
        let slot = slot_for_row(2, 0).unwrap();
        assert_eq!(destination_for_slot(2, slot), 0);
    }
}
