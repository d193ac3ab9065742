use std::cell::Cell;
use std::rc::Rc;

/// Test helper: a clonable value whose drops are tallied in a shared counter, for checking that
/// the list frees each node exactly once.
#[derive(Debug, Clone)]
pub(crate) struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub(crate) fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
