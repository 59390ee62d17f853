//! qtoken CLI library
//!
//! This library exposes the CLI commands for programmatic use and testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use config::QtokenConfig;
pub use error::CliError;
pub use output::OutputFormat;
