//! Line Reports
//!
//! Reads the lines of a text file, keeps those that meet a minimum length and
//! renders a short summary of the result.

pub mod domain;
pub use domain::{build_report, load_config, Config, ConfigError, Report};

/// Filesystem access for line sequences.
pub mod storage;
pub use storage::{read_lines, try_read_lines, LineSource, Lines, ReadError};

/// Rendering reports for output.
pub mod format;
pub use format::{format_report, format_report_json};
