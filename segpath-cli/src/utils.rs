//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, base scoping, and output formatting.

use crate::error::CliError;
use segpath::output::Report;
use segpath::path::{Path, Relationship};
use segpath::{Config, ConfigBuilder, OutputFormat};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Load exactly this configuration file.
    pub config: Option<PathBuf>,

    /// Resolve every path within this base.
    pub base: Option<String>,

    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        if !file.exists() {
            return Err(CliError::Config(format!(
                "file not found: {}",
                file.display()
            )));
        }
        builder = builder.with_file(file);
    }

    let overrides = Config {
        base: global.base.clone(),
        confine_to_base: None,
        output_format: global.format,
    };

    let config = builder
        .with_config(overrides)
        .build()
        .map_err(config_failure)?;

    log::debug!("effective configuration: {config:?}");
    Ok(config)
}

/// Map a configuration build failure, keeping I/O failures distinct.
fn config_failure(err: segpath::Error) -> CliError {
    match err {
        segpath::Error::Io(io) => CliError::Io(io),
        other => CliError::Config(other.to_string()),
    }
}

/// The scope every command-line path is resolved within.
///
/// Without a configured base this is the root, so scoped operations behave
/// exactly like the free functions.
pub fn scope(config: &Config) -> Result<Path, CliError> {
    match config.base {
        Some(ref base) => Path::new([base]).map_err(|e| CliError::Config(e.to_string())),
        None => Ok(Path::root()),
    }
}

/// Reject `resolved` if the configuration confines results to the base and
/// it lies outside it.
pub fn ensure_within(config: &Config, scope: &Path, resolved: &str) -> Result<(), CliError> {
    if !config.confined() {
        return Ok(());
    }

    let candidate = Path::new([resolved])?;
    if Relationship::is_within(&candidate.resolved(), &scope.resolved()) {
        return Ok(());
    }

    Err(CliError::SemanticFailure(format!(
        "'{candidate}' is outside the base '{scope}'"
    )))
}

/// Format a report with the configured output format.
pub fn format_report(config: &Config, report: &Report) -> Result<String, CliError> {
    let formatter = config.format().create_formatter();
    formatter.format(report).map_err(CliError::from)
}

/// Print a report to stdout. An empty rendering prints nothing.
pub fn emit(config: &Config, report: &Report) -> Result<(), CliError> {
    let output = format_report(config, report)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confined_to(base: &str) -> Config {
        Config {
            base: Some(base.to_string()),
            confine_to_base: Some(true),
            output_format: None,
        }
    }

    #[test]
    fn test_config_failure_keeps_io_distinct() {
        let io = segpath::Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "working directory removed",
        ));
        let err = config_failure(io);
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 5);

        let invalid = segpath::Error::Validation {
            field: "base".to_string(),
            message: "contains a null byte".to_string(),
        };
        let err = config_failure(invalid);
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_scope_defaults_to_root() {
        assert!(scope(&Config::default()).unwrap().is_root());
    }

    #[test]
    fn test_scope_uses_base() {
        let config = Config {
            base: Some("a/./b".to_string()),
            ..Default::default()
        };
        assert_eq!(scope(&config).unwrap().as_str(), "a/b");
    }

    #[test]
    fn test_ensure_within_unconfined_accepts_anything() {
        let config = Config {
            base: Some("a".to_string()),
            ..Default::default()
        };
        let base = scope(&config).unwrap();
        assert!(ensure_within(&config, &base, "x/y").is_ok());
    }

    #[test]
    fn test_ensure_within_confined() {
        let config = confined_to("a/b");
        let base = scope(&config).unwrap();

        assert!(ensure_within(&config, &base, "a/b").is_ok());
        assert!(ensure_within(&config, &base, "a/b/c").is_ok());

        let err = ensure_within(&config, &base, "a").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(ensure_within(&config, &base, "a/bc").is_err());
    }

    #[test]
    fn test_format_report_uses_config_format() {
        let report = Report::new(["a"], Some("a".to_string()));
        let json = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        assert_eq!(format_report(&Config::default(), &report).unwrap(), "a");
        assert!(format_report(&json, &report).unwrap().contains("\"result\":\"a\""));
    }
}
