use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{CursorList, Link};

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head,
            _phantom: PhantomData,
        }
    }
}

/// A front-to-back iterator over a [`CursorList`], starting from the head regardless of where the
/// list's own cursor sits.
pub struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        // SAFETY: The shared borrow of the list held by this iterator keeps every node alive for
        // 'a; yielding &'a T out of the node is therefore sound.
        Some(unsafe { &*(node.value() as *const T) })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> FromIterator<T> for CursorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CursorList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CursorList<T> {
    /// Appends every element in order. After the first append the cursor rides the tail, so each
    /// subsequent `insert_after` splices in constant time.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Park the cursor at end-of-list so the first insertion appends rather than splicing
        // mid-list.
        self.cursor = None;
        for value in iter {
            self.insert_after(value);
        }
    }
}
