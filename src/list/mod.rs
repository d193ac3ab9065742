mod cursor_list;
mod error;
mod iter;
mod node;
mod tests;

pub use cursor_list::*;
pub use error::*;
pub use iter::*;
pub(crate) use node::*;
