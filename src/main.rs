//! Reads whitespace-separated integers from stdin and prints them in reverse order.
//!
//! ```text
//! $ echo 1 2 3 4 5 | reverse
//! 5 4 3 2 1
//! ```
//!
//! Reading stops at end of input or at the first token that isn't an integer. There are no flags
//! and no environment variables.

use std::io::{self, Read, Write};

use cursor_list::CursorList;

fn main() -> io::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut list = CursorList::new();
    for token in input.split_whitespace() {
        let Ok(value) = token.parse::<i64>() else {
            break;
        };
        // Each insertion lands at the front with the cursor on it, so the list ends up in
        // reverse input order.
        list.insert_before(value);
    }

    let mut out = io::stdout().lock();
    while !list.is_empty() {
        list.move_head();
        write!(out, "{} ", list.item())?;
        list.delete();
    }
    writeln!(out)?;

    Ok(())
}
