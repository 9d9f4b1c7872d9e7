//! Environment variable handling for configuration overrides.
//!
//! This module reads the SEGPATH_* variables that override configuration
//! file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides `base`.
pub const BASE_ENV: &str = "SEGPATH_BASE";

/// Overrides `confine_to_base`.
pub const CONFINE_ENV: &str = "SEGPATH_CONFINE_TO_BASE";

/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "SEGPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use segpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown output format or a malformed boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(base) = env::var(BASE_ENV) {
            config.base = Some(base);
        }

        if let Ok(val) = env::var(CONFINE_ENV) {
            config.confine_to_base = Some(Self::parse_bool(CONFINE_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(val.parse()?);
        }

        Ok(())
    }

    /// Parse boolean from string (supports multiple formats).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
