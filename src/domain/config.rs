use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Run parameters for a report.
///
/// The default value is the built-in configuration used when neither a
/// config file nor command-line overrides are supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The name printed in the report header.
    pub project_name: String,

    /// The text file lines are read from.
    pub input_path: PathBuf,

    /// Lines with fewer characters than this are left out of the filtered
    /// list.
    ///
    /// They still count towards the total line count.
    pub min_line_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            input_path: default_input_path(),
            min_line_length: default_min_line_length(),
        }
    }
}

/// Returns the built-in configuration.
///
/// This never fails.
#[must_use]
pub fn load_config() -> Config {
    Config::default()
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// Fields missing from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Errors that can occur while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML, or holds values of the wrong type.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    /// The config file could not be written.
    #[error("failed to write config file {}: {source}", .path.display())]
    Write {
        /// The file that was written to.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

fn default_project_name() -> String {
    "java-app".to_string()
}

fn default_input_path() -> PathBuf {
    PathBuf::from("sample.txt")
}

const fn default_min_line_length() -> usize {
    3
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_project_name")]
        project_name: String,

        #[serde(default = "default_input_path")]
        input_path: PathBuf,

        #[serde(default = "default_min_line_length")]
        min_line_length: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                project_name,
                input_path,
                min_line_length,
            } => Self {
                project_name,
                input_path,
                min_line_length,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            project_name: config.project_name,
            input_path: config.input_path,
            min_line_length: config.min_line_length,
        }
    }
}
