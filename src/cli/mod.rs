//! CLI module for the framework registry
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Open the record store and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ServeOverrides};
pub use commands::{init, run, run_command, serve};
pub use config::{Config, DEFAULT_DATA_FILE};
pub use errors::{CliError, CliResult};
