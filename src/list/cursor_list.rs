use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{InvalidCursorAccess, Iter, Link, Node, NodePtr};
use crate::util::result::ResultExtension;

/// A doubly-linked list traversed and edited through a single internal cursor.
///
/// Unlike a list paired with a separate cursor type, the cursor here *is* part of the list's
/// state: every positional operation ([`item`](CursorList::item), [`delete`](CursorList::delete),
/// [`insert_before`](CursorList::insert_before), [`insert_after`](CursorList::insert_after)) acts
/// at the cursor, and the cursor is moved with [`move_head`](CursorList::move_head),
/// [`move_next`](CursorList::move_next) and [`move_prev`](CursorList::move_prev).
///
/// The cursor has one extra position beyond the nodes themselves: *end-of-list*, where it holds
/// no node at all. This is the position on a freshly created (empty) list, and the position
/// reached by stepping [`move_next`](CursorList::move_next) off the last node (or
/// [`move_prev`](CursorList::move_prev) off the first). [`end_of_list`](CursorList::end_of_list)
/// reports it.
///
/// # Time Complexity
/// With `n` the number of items in the list:
///
/// | Method | Complexity |
/// |-|-|
/// | `is_empty`/`end_of_list` | `O(1)` |
/// | `move_head`/`move_next`/`move_prev` | `O(1)` |
/// | `item`/`current` | `O(1)` |
/// | `delete` | `O(1)` |
/// | `insert_before` | `O(1)` |
/// | `insert_after` at a node or on an empty list | `O(1)` |
/// | `insert_after` at end-of-list | `O(n)` |
///
/// The `O(n)` case exists because end-of-list is represented as a bare "no node" state rather
/// than a tail sentinel, so appending from there has to walk to the true last node first.
pub struct CursorList<T> {
    pub(crate) head: Link<T>,
    pub(crate) cursor: Link<T>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> CursorList<T> {
    /// Creates a new CursorList with no elements. The cursor starts at end-of-list.
    pub const fn new() -> CursorList<T> {
        CursorList {
            head: None,
            cursor: None,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the CursorList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns true if the cursor holds no node: either the list is empty, or the cursor has been
    /// stepped past the first or last element.
    pub const fn end_of_list(&self) -> bool {
        self.cursor.is_none()
    }

    /// Moves the cursor to the first element. Does nothing on an empty list.
    pub fn move_head(&mut self) {
        if let Some(head) = self.head {
            self.cursor = Some(head);
        }
    }

    /// Moves the cursor one element forward. Stepping off the last element leaves the cursor at
    /// end-of-list. Does nothing if the cursor is already at end-of-list.
    pub fn move_next(&mut self) {
        if let Some(node) = self.cursor {
            self.cursor = *node.next();
        }
    }

    /// Moves the cursor one element backward. Stepping off the first element leaves the cursor at
    /// end-of-list. Does nothing if the cursor is already at end-of-list.
    pub fn move_prev(&mut self) {
        if let Some(node) = self.cursor {
            self.cursor = *node.prev();
        }
    }

    /// Returns a reference to the element at the cursor, or [`None`] at end-of-list.
    pub fn current(&self) -> Option<&T> {
        self.cursor.as_ref().map(|node| node.value())
    }

    /// Returns a mutable reference to the element at the cursor, or [`None`] at end-of-list.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.cursor.as_mut().map(|node| node.value_mut())
    }

    /// Removes the element at the cursor, leaving the cursor on the removed element's successor
    /// (end-of-list if the last element was removed). Removing the first element moves the head
    /// forward, so deleting the only element leaves the list empty with the cursor at
    /// end-of-list.
    ///
    /// Does nothing if the cursor is at end-of-list.
    pub fn delete(&mut self) {
        let Some(ptr) = self.cursor else { return };

        let node = ptr.take_node();

        self.cursor = node.next;
        if let Some(prev) = node.prev {
            *prev.next_mut() = node.next;
        }
        if let Some(next) = node.next {
            *next.prev_mut() = node.prev;
        }
        if self.head == Some(ptr) {
            self.head = node.next;
        }
    }

    /// Inserts `value` before the cursor and leaves the cursor on the new element. Inserting
    /// before the first element makes the new element the head.
    ///
    /// With the cursor at end-of-list on a *non-empty* list, the new element is inserted at the
    /// front, not appended. This reads surprisingly against the method name, but it is the
    /// contract callers rely on: repeatedly calling `insert_before` builds the list in reverse
    /// input order. See [`insert_after`](CursorList::insert_after) for the appending counterpart.
    pub fn insert_before(&mut self, value: T) {
        match self.cursor {
            Some(at) => {
                let node = NodePtr::from_node(Node {
                    value,
                    prev: *at.prev(),
                    next: Some(at),
                });

                match *at.prev() {
                    Some(prev) => *prev.next_mut() = Some(node),
                    None => self.head = Some(node),
                }
                *at.prev_mut() = Some(node);
                self.cursor = Some(node);
            },
            None => match self.head {
                Some(old_head) => {
                    let node = NodePtr::from_node(Node {
                        value,
                        prev: None,
                        next: Some(old_head),
                    });

                    *old_head.prev_mut() = Some(node);
                    self.head = Some(node);
                    self.cursor = Some(node);
                },
                None => self.insert_single(value),
            },
        }
    }

    /// Inserts `value` after the cursor and leaves the cursor on the new element.
    ///
    /// With the cursor at end-of-list on a non-empty list, the new element is appended after the
    /// last element. There is no tail pointer, so this case walks the whole chain first (`O(n)`);
    /// every other case is `O(1)`.
    pub fn insert_after(&mut self, value: T) {
        match self.cursor {
            Some(at) => {
                let node = NodePtr::from_node(Node {
                    value,
                    prev: Some(at),
                    next: *at.next(),
                });

                if let Some(next) = *at.next() {
                    *next.prev_mut() = Some(node);
                }
                *at.next_mut() = Some(node);
                self.cursor = Some(node);
            },
            None => match self.head {
                Some(head) => {
                    let mut tail = head;
                    while let Some(next) = *tail.next() {
                        tail = next;
                    }

                    let node = NodePtr::from_node(Node {
                        value,
                        prev: Some(tail),
                        next: None,
                    });

                    *tail.next_mut() = Some(node);
                    self.cursor = Some(node);
                },
                None => self.insert_single(value),
            },
        }
    }

    /// Returns a front-to-back iterator over the elements, independent of the cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn insert_single(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        self.head = Some(node);
        self.cursor = Some(node);
    }
}

impl<T: Clone> CursorList<T> {
    /// Returns a copy of the element at the cursor, panicking at end-of-list.
    ///
    /// The same read without the `Clone` requirement is available as
    /// [`current`](CursorList::current).
    ///
    /// # Panics
    /// Panics if the list is empty or the cursor is at end-of-list.
    pub fn item(&self) -> T {
        self.try_item().throw()
    }

    /// Returns a copy of the element at the cursor, returning an [`Err`] at end-of-list rather
    /// than panicking.
    pub fn try_item(&self) -> Result<T, InvalidCursorAccess> {
        self.current().cloned().ok_or(InvalidCursorAccess)
    }
}

impl<T> Drop for CursorList<T> {
    fn drop(&mut self) {
        // Teardown ignores wherever the cursor was left: rewind to the head and delete until
        // nothing remains, so every node is freed exactly once.
        while !self.is_empty() {
            self.move_head();
            self.delete();
        }
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for CursorList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
