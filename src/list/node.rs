use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box and immediately leaked into raw pointers, because the list
// needs aliased access to both neighbours of a node while splicing. take_node is the only way a
// node returns to being a Box, which re-establishes unique ownership right before the value is
// moved out.

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        // SAFETY: Box::into_raw never returns a null pointer.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    /// Reclaims the node as an owned value, deallocating its heap slot.
    ///
    /// After this call every other `NodePtr` to the same node is dangling and must only be used
    /// for pointer comparison, never dereferenced.
    pub(crate) fn take_node(self) -> Node<T> {
        // SAFETY: The pointer originates from Box::into_raw in from_node, and the list frees each
        // node at most once (on delete or teardown).
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub(crate) fn value(&self) -> &T {
        // SAFETY: self points to a live node; see take_node for the only invalidation point.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        // SAFETY: As in value.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn prev(&self) -> &Link<T> {
        // SAFETY: As in value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    pub(crate) fn prev_mut(&self) -> &mut Link<T> {
        // SAFETY: As in value. The &self receiver permits relinking a neighbour while holding
        // copies of adjacent pointers; callers never hold two live references into one node.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub(crate) fn next(&self) -> &Link<T> {
        // SAFETY: As in value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub(crate) fn next_mut(&self) -> &mut Link<T> {
        // SAFETY: As in prev_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
