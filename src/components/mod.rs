//! UI Components
//!
//! Reusable Leptos components.

mod edit_modal;
mod edit_target;
mod new_item_form;
mod todo_item;
mod todo_list_view;

pub use edit_modal::EditModal;
pub use edit_target::EditTarget;
pub use new_item_form::NewItemForm;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
