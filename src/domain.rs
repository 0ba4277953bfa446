//! Domain models for line reports.
//!
//! This module contains the run configuration and the report computed from a
//! sequence of lines.

mod config;
pub use config::{load_config, Config, ConfigError};

/// The report built from a line sequence.
pub mod report;
pub use report::{build_report, Report};
