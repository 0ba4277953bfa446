/// Reading line sequences from the filesystem.
pub mod lines;

pub use lines::{read_lines, try_read_lines, LineSource, Lines, ReadError, FALLBACK_LINES};
