//! CLI argument definitions using clap
//!
//! Commands:
//! - framework-registry init --config <path>
//! - framework-registry serve --config <path> [--host <addr>] [--port <port>] [--data-file <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Framework registry - CRUD service for JavaScript framework records
#[derive(Parser, Debug)]
#[command(name = "framework-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./framework-registry.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./framework-registry.json")]
        config: PathBuf,

        #[command(flatten)]
        overrides: ServeOverrides,
    },
}

/// Command-line values that take precedence over the configuration file
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeOverrides {
    /// Override the configured listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the configured data file
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
