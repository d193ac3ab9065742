use derive_more::{Display, Error};

/// The error produced by reading the element at the cursor while the cursor is at end-of-list
/// (which includes the empty list).
///
/// Cursor movement and deletion at end-of-list are defined as silent no-ops; reading is the one
/// operation with nothing sensible to return, so it alone reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cursor is at end-of-list; there is no element to read!")]
pub struct InvalidCursorAccess;
