//! Item List Operations
//!
//! Pure transforms over the to-do list. Each takes the current list and
//! returns the next one; operations that don't apply (blank text,
//! unknown id, missing destination) return the list unchanged.

use crate::models::Item;

/// True when the text trims to nothing
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Append a new item to the end of the list. Blank text is a no-op.
pub fn append(items: &[Item], text: &str) -> Vec<Item> {
    if is_blank(text) {
        return items.to_vec();
    }
    let mut next = items.to_vec();
    next.push(Item::new(text));
    next
}

/// Remove the item with the given id. Unknown ids are a no-op.
pub fn remove(items: &[Item], id: &str) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Move the item at `source` so it ends up at `destination`, shifting the
/// rows in between. `destination` is the moved item's final index once it
/// has been taken out of the list. `None` (released outside any drop
/// target) and out-of-range indices are a no-op.
pub fn reorder(items: &[Item], source: usize, destination: Option<usize>) -> Vec<Item> {
    let Some(destination) = destination else {
        return items.to_vec();
    };
    if source >= items.len() || destination >= items.len() {
        return items.to_vec();
    }
    let mut next = items.to_vec();
    let moved = next.remove(source);
    next.insert(destination, moved);
    next
}

/// Replace the content of the item with the given id, keeping its id and
/// position. The draft is stored as-is, empty included. Unknown ids are a
/// no-op.
pub fn replace_content(items: &[Item], id: &str, content: &str) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item {
                    id: item.id.clone(),
                    content: content.to_string(),
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_items(contents: &[&str]) -> Vec<Item> {
        contents.iter().map(|c| Item::new(*c)).collect()
    }

    fn contents(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.content.as_str()).collect()
    }

    #[test]
    fn test_append_blank_is_noop() {
        let items = make_items(&["Buy milk"]);
        assert_eq!(append(&items, ""), items);
        assert_eq!(append(&items, "   "), items);
        assert_eq!(append(&items, "\t\n"), items);
    }

    #[test]
    fn test_append_pushes_to_end() {
        let items = make_items(&["Buy milk"]);
        let next = append(&items, "Walk dog");

        assert_eq!(next.len(), 2);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].content, "Walk dog");
    }

    #[test]
    fn test_append_keeps_raw_text() {
        // Validation runs on the trimmed text, storage keeps it raw
        let next = append(&[], "  padded  ");
        assert_eq!(next[0].content, "  padded  ");
    }

    #[test]
    fn test_append_generates_fresh_id() {
        let items = make_items(&["Buy milk"]);
        let next = append(&items, "Buy milk");

        assert_eq!(next.len(), 2);
        assert_ne!(next[0].id, next[1].id);
    }

    #[test]
    fn test_remove_present_id() {
        let items = make_items(&["A", "B", "C"]);
        let next = remove(&items, &items[1].id);

        assert_eq!(contents(&next), vec!["A", "C"]);
        assert_eq!(next[0].id, items[0].id);
        assert_eq!(next[1].id, items[2].id);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let items = make_items(&["A", "B"]);
        assert_eq!(remove(&items, "no-such-id"), items);
    }

    #[test]
    fn test_reorder_first_to_last() {
        let items = make_items(&["A", "B", "C"]);
        let next = reorder(&items, 0, Some(2));
        assert_eq!(contents(&next), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_last_to_first() {
        let items = make_items(&["A", "B", "C"]);
        let next = reorder(&items, 2, Some(0));
        assert_eq!(contents(&next), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let items = make_items(&["A", "B", "C"]);
        assert_eq!(reorder(&items, 1, Some(1)), items);
    }

    #[test]
    fn test_reorder_without_destination_is_noop() {
        let items = make_items(&["A", "B", "C"]);
        assert_eq!(reorder(&items, 0, None), items);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let items = make_items(&["A", "B"]);
        assert_eq!(reorder(&items, 5, Some(0)), items);
        assert_eq!(reorder(&items, 0, Some(5)), items);
    }

    #[test]
    fn test_replace_content_keeps_id_and_position() {
        let items = make_items(&["A", "B", "C"]);
        let next = replace_content(&items, &items[1].id, "B2");

        assert_eq!(contents(&next), vec!["A", "B2", "C"]);
        assert_eq!(next[1].id, items[1].id);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_replace_content_accepts_empty_draft() {
        // Unlike append, committing an edit applies no validation
        let items = make_items(&["A"]);
        let next = replace_content(&items, &items[0].id, "");
        assert_eq!(next[0].content, "");
    }

    #[test]
    fn test_replace_content_unknown_id_is_noop() {
        let items = make_items(&["A", "B"]);
        assert_eq!(replace_content(&items, "gone", "ignored"), items);
    }

    #[test]
    fn test_unchanged_draft_commit_is_identity() {
        let items = make_items(&["A", "B"]);
        let next = replace_content(&items, &items[0].id, "A");
        assert_eq!(next, items);
    }

    #[test]
    fn test_add_reorder_remove_flow() {
        let list = append(&[], "Buy milk");
        let list = append(&list, "Walk dog");
        assert_eq!(contents(&list), vec!["Buy milk", "Walk dog"]);
        let first_id = list[0].id.clone();

        let list = reorder(&list, 1, Some(0));
        assert_eq!(contents(&list), vec!["Walk dog", "Buy milk"]);

        let list = remove(&list, &first_id);
        assert_eq!(contents(&list), vec!["Walk dog"]);
    }
}
