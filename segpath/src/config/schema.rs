//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, OutputFormat};
///
/// let config = Config {
///     base: Some("workspace/project".to_string()),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.base.as_deref(), Some("workspace/project"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scope that every command-line path is resolved within.
    pub base: Option<String>,

    /// Reject results that climb out of `base`.
    pub confine_to_base: Option<bool>,

    /// Output format for command results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Whether results must stay within `base`. Defaults to `false`.
    #[must_use]
    pub fn confined(&self) -> bool {
        self.confine_to_base.unwrap_or(false)
    }

    /// The configured output format, or text.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use segpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare values, one per line.
    #[default]
    Text,
    /// A JSON object per invocation.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected text or json)"),
            }),
        }
    }
}
