//! settings-store: JSON settings file manager
//!
//! A CLI tool that reads, validates and writes settings files holding a
//! port and a debug flag, with a fallback lookup in the home directory.

mod cli;
mod logging;
mod settings;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use settings::{Config, SettingsStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_dir.as_deref())?;

    let mut store = SettingsStore::new();
    if let Some(home) = cli.home {
        store = store.with_home_dir(home);
    }

    // Execute command
    match cli.command {
        Commands::Show { path } => {
            let config = store
                .read(&path)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Write { path, port, debug } => {
            store
                .write(&path, &Config::new(port, debug))
                .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
            if !cli.quiet {
                eprintln!("Settings written to: {}", path.display());
            }
        }
        Commands::Check { path } => {
            let corrupted = store.is_corrupted(&path);
            if !cli.quiet {
                println!("{}", if corrupted { "corrupted" } else { "ok" });
            }
            if corrupted {
                process::exit(1);
            }
        }
        Commands::Version => {
            println!("settings-store {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
