//! Logging system setup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use time::macros::format_description;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prefix of rotated log file names.
const LOG_FILE_PREFIX: &str = "settings-store";

/// Initialize the logging system.
///
/// Logs go to stderr unless `log_dir` is given, in which case they are
/// written to a daily rotated file in that directory.
pub fn init(verbose: bool, log_dir: Option<&Path>) -> Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Use local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_timer(timer);

    let result = match log_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            }
            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    layer
                        .with_writer(file_appender)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
