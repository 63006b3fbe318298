//! Settings store for reading, writing and checking settings files.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::error::SettingsError;
use super::Config;

/// Permissions for newly created settings files.
#[cfg(unix)]
const SETTINGS_FILE_MODE: u32 = 0o644;

/// Reads and writes JSON settings files.
///
/// Every call goes to the filesystem; nothing is cached between calls.
pub struct SettingsStore {
    sink: Box<dyn DiagnosticSink>,
    home_dir: Option<PathBuf>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Create a store that logs through tracing and falls back to the user's home directory.
    pub fn new() -> Self {
        Self {
            sink: Box::new(TracingSink),
            home_dir: None,
        }
    }

    /// Replace the diagnostic sink.
    #[allow(dead_code)]
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Use `home_dir` instead of the platform home directory for the fallback lookup.
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Read, decode and validate the settings file at `path`.
    ///
    /// If `path` cannot be opened, `<home>/<path>` is tried instead and only
    /// the second error is reported. When the decoded file has `debug` set, a
    /// diagnostic line is emitted before the port is validated.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Config, SettingsError> {
        let path = path.as_ref();

        let bytes = {
            let mut file = self.open_with_fallback(path)?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            bytes
        };

        let config: Config = serde_json::from_slice(&bytes).map_err(SettingsError::Decode)?;

        if config.debug {
            self.sink.emit(&format!(
                "Successfully parsed settings file: {}",
                path.display()
            ));
        }

        config.validate()?;

        Ok(config)
    }

    /// Serialize `config` and write it to `path`, replacing any existing contents.
    ///
    /// The write is not atomic and `config` is not validated.
    pub fn write(&self, path: impl AsRef<Path>, config: &Config) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec(config).map_err(SettingsError::Encode)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(SETTINGS_FILE_MODE);
        }

        let mut file = options.open(path)?;
        file.write_all(&bytes)?;

        debug!("Wrote settings file: {}", path.display());
        Ok(())
    }

    /// Check whether the settings file at `path` is corrupted.
    ///
    /// Returns `false` only when [`read`](Self::read) yields a config.
    /// Unreadable, undecodable and invalid-port files are all corrupted.
    pub fn is_corrupted(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.read(path) {
            Ok(_) => false,
            Err(err) if err.is_invalid_port() => {
                debug!("Settings file {} has an invalid port", path.display());
                true
            }
            Err(err) => {
                debug!(
                    "Settings file {} is unreadable ({:?}): {}",
                    path.display(),
                    err.kind(),
                    err
                );
                true
            }
        }
    }

    fn open_with_fallback(&self, path: &Path) -> Result<File, SettingsError> {
        let primary_err = match File::open(path) {
            Ok(file) => return Ok(file),
            Err(err) => err,
        };

        let home = self.home_dir.clone().or_else(dirs::home_dir);
        let fallback = fallback_path(home.as_deref(), path);

        debug!(
            "Failed to open {} ({}), trying {}",
            path.display(),
            primary_err,
            fallback.display()
        );

        Ok(File::open(&fallback)?)
    }
}

/// `<home>/<path>`, or `/<path>` when no home directory is known.
fn fallback_path(home: Option<&Path>, path: &Path) -> PathBuf {
    home.unwrap_or_else(|| Path::new("/")).join(path)
}
