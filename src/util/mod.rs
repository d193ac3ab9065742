pub(crate) mod alloc;
pub(crate) mod panic;
pub(crate) mod result;
