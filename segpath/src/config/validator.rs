//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::resolve;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { base: Some("../outside".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `base` cannot be resolved, contains a
    /// null byte, or `confine_to_base` is set without a `base`.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base) = config.base {
            Self::validate_base(base)?;
        } else if config.confined() {
            return Err(Error::Validation {
                field: "confine_to_base".into(),
                message: "requires a base to confine to".into(),
            });
        }

        Ok(())
    }

    fn validate_base(base: &str) -> Result<()> {
        if base.contains('\0') {
            return Err(Error::Validation {
                field: "base".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        resolve([base]).map_err(|e| Error::Validation {
            field: "base".into(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base() {
        let config = Config {
            base: Some("a/./b/../c".into()),
            confine_to_base: Some(true),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_base_escaping_root() {
        let config = Config {
            base: Some("a/../..".into()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("base"));
    }

    #[test]
    fn test_base_with_null_byte() {
        let config = Config {
            base: Some("a\0b".into()),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_confine_without_base() {
        let config = Config {
            confine_to_base: Some(true),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
