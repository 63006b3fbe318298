//! Settings validation.

use super::error::SettingsError;
use super::Config;

/// Validate settings.
pub fn validate(config: &Config) -> Result<(), SettingsError> {
    if config.port == 0 {
        return Err(SettingsError::InvalidPort);
    }

    Ok(())
}
