//! Signal file input and output.
//!
//! Signals are stored as plain text: two metadata lines, a sample count, then
//! one `index value` pair per line.

mod reader;
mod writer;

pub use reader::{HEADER_LINES, parse_signal, read_signal};
pub use writer::{format_signal, write_signal};
