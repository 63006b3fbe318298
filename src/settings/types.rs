//! Settings data types.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::SettingsError;
use super::validation;

/// Contents of a settings file.
///
/// Keys missing from the file decode to zero values and unknown keys are
/// ignored, so `{"debug": true}` yields `port == 0`. Keys match without
/// regard to ASCII case, and when a key repeats the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Listening port. Only zero is rejected; the upper bound is not checked.
    pub port: u64,

    /// Emit a diagnostic line whenever this file is parsed
    pub debug: bool,
}

impl Config {
    pub fn new(port: u64, debug: bool) -> Self {
        Self { port, debug }
    }

    /// Validate configuration and return an error if invalid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validation::validate(self)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(ConfigVisitor)
    }
}

/// Decodes a settings object. A `null` document or field value leaves the
/// zero value (or the previous value of a repeated key) in place.
struct ConfigVisitor;

impl<'de> Visitor<'de> for ConfigVisitor {
    type Value = Config;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a settings object")
    }

    fn visit_none<E>(self) -> Result<Config, E>
    where
        E: serde::de::Error,
    {
        Ok(Config::default())
    }

    fn visit_unit<E>(self) -> Result<Config, E>
    where
        E: serde::de::Error,
    {
        Ok(Config::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Config, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Config, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = Config::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("port") {
                if let Some(port) = map.next_value::<Option<u64>>()? {
                    config.port = port;
                }
            } else if key.eq_ignore_ascii_case("debug") {
                if let Some(debug) = map.next_value::<Option<bool>>()? {
                    config.debug = debug;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(config)
    }
}
