//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Load, validate and persist JSON settings files
#[derive(Parser)]
#[command(
    name = "settings-store",
    version,
    about = "Load, validate and persist JSON settings files",
    long_about = "Reads settings files containing a port and a debug flag. \
                  Paths that cannot be opened are looked up again under the home directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched when a settings path cannot be opened (default: home directory)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Write logs to daily rotated files in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Read a settings file and print it as JSON (alias: read)
    #[command(alias = "read")]
    Show {
        /// Settings file path
        path: PathBuf,
    },
    /// Write a settings file, replacing any existing contents
    Write {
        /// Settings file path
        path: PathBuf,

        /// Port to store
        #[arg(long, short = 'p')]
        port: u64,

        /// Store the debug flag as enabled
        #[arg(long)]
        debug: bool,
    },
    /// Check whether a settings file is corrupted (exit status 1 if so)
    Check {
        /// Settings file path
        path: PathBuf,
    },
    /// Display version information
    Version,
}
