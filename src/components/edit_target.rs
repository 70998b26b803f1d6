//! Edit Target
//!
//! Identifies the item open in the edit modal.

/// Item being edited: id plus the content snapshot that seeds the draft
#[derive(Clone, Debug, PartialEq)]
pub struct EditTarget {
    pub id: String,
    pub content: String,
}
