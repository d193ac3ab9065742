#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(list: &CursorList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_new_list_is_empty() {
    let list = CursorList::<u32>::new();
    assert!(list.is_empty(), "A fresh list should be empty.");
    assert!(
        list.end_of_list(),
        "The cursor of a fresh list should be at end-of-list."
    );
}

#[test]
fn test_insert_before_builds_in_reverse() {
    let mut list = CursorList::new();

    for value in ["a", "b", "c"] {
        list.insert_before(value);
        assert!(
            !list.is_empty(),
            "The list should be non-empty immediately after an insertion."
        );
        assert_eq!(
            list.current(),
            Some(&value),
            "The cursor should sit on the element just inserted."
        );
    }

    assert_eq!(
        collect(&list),
        ["c", "b", "a"],
        "Repeated insert_before should build the list in reverse insertion order."
    );
}

#[test]
fn test_insert_after_builds_in_order() {
    let mut list = CursorList::new();

    for value in ["a", "b", "c"] {
        list.insert_after(value);
        assert_eq!(
            list.current(),
            Some(&value),
            "The cursor should sit on the element just inserted."
        );
    }

    assert_eq!(
        collect(&list),
        ["a", "b", "c"],
        "Repeated insert_after should keep insertion order."
    );
}

#[test]
fn test_insert_after_at_end_of_list_appends_at_tail() {
    let mut list = CursorList::new();
    for value in ["a", "b", "c"] {
        list.insert_after(value);
        // Step off the last node so the next insertion takes the end-of-list path.
        list.move_next();
        assert!(list.end_of_list());
    }

    assert_eq!(
        collect(&list),
        ["a", "b", "c"],
        "insert_after at end-of-list should walk to the true tail and append."
    );
}

#[test]
fn test_insert_before_at_end_of_list_prepends() {
    let mut list = CursorList::new();
    list.insert_after("a");
    list.insert_after("b");
    list.move_next();
    assert!(list.end_of_list());

    list.insert_before("x");
    assert_eq!(
        collect(&list),
        ["x", "a", "b"],
        "insert_before at end-of-list inserts at the front of the list, not at the back."
    );
    assert_eq!(
        list.current(),
        Some(&"x"),
        "The cursor should sit on the newly inserted head."
    );
}

#[test]
fn test_insert_before_mid_list() {
    let mut list = CursorList::new();
    for value in [1, 2, 4] {
        list.insert_after(value);
    }
    list.move_prev();
    assert_eq!(list.current(), Some(&2));

    list.insert_before(3);
    assert_eq!(
        collect(&list),
        [1, 3, 2, 4],
        "insert_before should splice directly before the cursor node."
    );

    list.move_prev();
    assert_eq!(
        list.current(),
        Some(&1),
        "The new node's backward link should reach the old predecessor."
    );
}

#[test]
fn test_delete_only_node_empties_the_list() {
    let mut list = CursorList::new();
    list.insert_before(7);

    list.delete();
    assert!(
        list.is_empty(),
        "Deleting the only node should leave the list empty."
    );
    assert!(
        list.end_of_list(),
        "Deleting the only node should leave the cursor at end-of-list."
    );
}

#[test]
fn test_delete_head_moves_head_forward() {
    let mut list = CursorList::new();
    for value in ["a", "b", "c"] {
        list.insert_after(value);
    }
    list.move_head();

    list.delete();
    assert_eq!(
        collect(&list),
        ["b", "c"],
        "Deleting the head should promote its successor."
    );
    assert_eq!(
        list.current(),
        Some(&"b"),
        "The cursor should land on the removed node's successor."
    );
}

#[test]
fn test_delete_middle_node_relinks_neighbours() {
    let mut list = CursorList::new();
    for value in ["a", "b", "c"] {
        list.insert_after(value);
    }
    list.move_prev();
    assert_eq!(list.current(), Some(&"b"));

    list.delete();
    assert_eq!(
        collect(&list),
        ["a", "c"],
        "A's forward link should skip straight to C."
    );
    assert_eq!(
        list.current(),
        Some(&"c"),
        "The cursor should land on the removed node's successor."
    );

    list.move_prev();
    assert_eq!(
        list.current(),
        Some(&"a"),
        "C's backward link should skip straight to A."
    );
}

#[test]
fn test_delete_last_node_leaves_cursor_at_end() {
    let mut list = CursorList::new();
    for value in [1, 2] {
        list.insert_after(value);
    }
    assert_eq!(list.current(), Some(&2));

    list.delete();
    assert!(
        list.end_of_list(),
        "Deleting the last node should leave the cursor at end-of-list."
    );
    assert_eq!(collect(&list), [1]);
    assert!(!list.is_empty());
}

#[test]
fn test_item_fails_at_end_of_list() {
    let list = CursorList::<i32>::new();
    assert_eq!(
        list.try_item(),
        Err(InvalidCursorAccess),
        "Reading from an empty list should fail."
    );

    let mut list = CursorList::new();
    for value in [1, 2, 3] {
        list.insert_after(value);
    }
    list.move_head();
    for _ in 0..3 {
        assert!(list.try_item().is_ok());
        list.move_next();
    }
    assert_eq!(
        list.try_item(),
        Err(InvalidCursorAccess),
        "Reading past the last node should fail."
    );

    assert_panics!(
        {
            let list = CursorList::<i32>::new();
            list.item()
        },
        "The panicking read should panic where try_item would fail."
    );
}

#[test]
fn test_movement_and_delete_are_noops_on_empty_list() {
    let mut list = CursorList::<u8>::new();

    list.move_head();
    list.move_next();
    list.move_prev();
    list.delete();

    assert!(list.is_empty(), "No-op calls should leave the list empty.");
    assert!(
        list.end_of_list(),
        "No-op calls should leave the cursor at end-of-list."
    );
}

#[test]
fn test_move_prev_off_head_reaches_end_of_list() {
    let mut list = CursorList::new();
    list.insert_before(1);
    assert!(!list.end_of_list());

    list.move_prev();
    assert!(
        list.end_of_list(),
        "Stepping backward off the head should reach end-of-list."
    );

    // From here the end-of-list insert_before rule applies: the new node becomes the head.
    list.insert_before(0);
    assert_eq!(collect(&list), [0, 1]);
}

#[test]
fn test_current_mut_edits_in_place() {
    let mut list = CursorList::new();
    for value in [1, 2, 3] {
        list.insert_after(value);
    }
    list.move_head();

    if let Some(value) = list.current_mut() {
        *value = 10;
    }
    assert_eq!(
        collect(&list),
        [10, 2, 3],
        "current_mut should write through to the node at the cursor."
    );
}

#[test]
fn test_drop_frees_every_node() {
    let counter = CountedDrop::new();

    let mut list = CursorList::new();
    for _ in 0..10 {
        list.insert_before(counter.clone());
    }
    // Leave the cursor mid-list; teardown shouldn't care where it was.
    list.move_head();
    list.move_next();
    list.move_next();

    drop(list);
    assert_eq!(
        counter.count(),
        10,
        "Teardown should drop every element exactly once."
    );
}

#[test]
fn test_delete_frees_the_node() {
    let counter = CountedDrop::new();

    let mut list = CursorList::new();
    for _ in 0..3 {
        list.insert_after(counter.clone());
    }
    list.move_head();
    list.delete();
    assert_eq!(
        counter.count(),
        1,
        "Deleting a node should drop its element immediately."
    );

    drop(list);
    assert_eq!(counter.count(), 3, "No element should be dropped twice.");
}

#[test]
fn test_from_iter_and_debug() {
    let list: CursorList<i32> = (1..=3).collect();
    assert_eq!(
        collect(&list),
        [1, 2, 3],
        "from_iter should append in order."
    );
    assert_eq!(
        format!("{list:?}"),
        "[1, 2, 3]",
        "Debug should render elements front-to-back."
    );

    let mut list = list;
    list.move_head();
    list.extend([4, 5]);
    assert_eq!(
        collect(&list),
        [1, 2, 3, 4, 5],
        "extend should append at the tail even when the cursor was mid-list."
    );
}
