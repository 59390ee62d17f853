//! Configuration module
//!
//! Handles discovery and loading of `qtoken.toml`. Command-line flags override
//! any value read from the file.

use crate::error::CliError;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = "qtoken.toml";

/// Default log filter when neither the flag, the environment nor the file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QtokenConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `info` or `qtoken_core=trace`
    pub level: String,
    /// Emit log lines as JSON objects
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl QtokenConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CliError::io(path.display(), e))?;
        toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    /// Find `qtoken.toml` in `start` or the nearest ancestor that has one
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the explicit config file if given, else a discovered one, else defaults.
    pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<Self, CliError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(start),
        };
        match path {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
