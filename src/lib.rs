//! A doubly-linked list driven by an internal cursor, in the style of the classic
//! data-structures-course list: one movable position inside the container through which all
//! reads, insertions and deletions happen.
//!
//! # Purpose
//! Most list APIs separate the container from its iterators. [`CursorList`] deliberately does
//! not: the cursor is a field of the list, movement is a mutation, and "no position" (the
//! end-of-list state) is an ordinary, reachable value of that field rather than an error. That
//! makes the type a good vehicle for studying node lifecycle and splice edge cases: every
//! boundary condition (empty list, head, past-the-end) is an explicit branch.
//!
//! # Error Handling
//! The container is intentionally permissive: moving or deleting at end-of-list does nothing.
//! Only reading fails, and it fails with a typed error ([`InvalidCursorAccess`]) through
//! [`CursorList::try_item`], with a panicking twin in [`CursorList::item`] for callers that have
//! already checked their position.
//!
//! # Quirks
//! [`CursorList::insert_before`] at end-of-list on a non-empty list inserts at the *front* of the
//! list. This is a long-standing part of the contract (it is what makes the reverse-building
//! idiom in the `reverse` binary work) and is kept as-is; see the method docs.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod list;

pub(crate) mod util;

#[doc(inline)]
pub use list::{CursorList, InvalidCursorAccess, Iter};
