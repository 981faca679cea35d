//! Chronicle CLI library.
//!
//! Argument parsing, configuration, input handling and output formatting
//! for the `chronicle` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
