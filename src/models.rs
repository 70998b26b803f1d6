//! Frontend Models
//!
//! Data structures for the to-do list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub content: String,
}

impl Item {
    /// Create an item with a freshly generated unique id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = Item::new("same text");
        let b = Item::new("same text");
        assert_ne!(a.id, b.id);
        assert_eq!(a.content, b.content);
    }
}
