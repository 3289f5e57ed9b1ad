//! Standard input feed.

use std::io::{self, BufRead};

/// Lock stdin for the life of the process. The lock already buffers.
pub fn open() -> impl BufRead {
    io::stdin().lock()
}
