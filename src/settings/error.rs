//! Error types for settings files.

use thiserror::Error;

/// Error returned by settings store operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Opening, reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid settings document
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Settings could not be serialized
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Port is zero
    #[error("Invalid port")]
    InvalidPort,
}

/// Coarse classification of a [`SettingsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Decode,
    Encode,
    Validation,
}

impl SettingsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Encode(_) => ErrorKind::Encode,
            Self::InvalidPort => ErrorKind::Validation,
        }
    }

    pub fn is_invalid_port(&self) -> bool {
        matches!(self, Self::InvalidPort)
    }
}
