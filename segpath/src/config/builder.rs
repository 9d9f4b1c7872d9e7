//! Configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from files, environment, and code.
///
/// Precedence, lowest to highest: defaults, user file, project file (or an
/// explicit file given with [`with_file`](Self::with_file)), environment,
/// programmatic overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start project configuration discovery from.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load exactly this file instead of discovering user and project files.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.explicit_file = Some(path.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore SEGPATH_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge every enabled source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else if let Some(ref path) = self.explicit_file {
            vec![ConfigSource {
                path: path.clone(),
                precedence: 2,
                config: ConfigLoader::load_file(path)?,
            }]
        } else {
            let working_dir = match self.working_dir {
                Some(ref dir) => dir.clone(),
                None => env::current_dir()?,
            };
            ConfigLoader::load_all(&working_dir)?
        };

        for source in &sources {
            log::debug!(
                "configuration source {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::BASE_ENV;
    use crate::config::schema::OutputFormat;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_with_overrides() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                base: Some("x/y".into()),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.base.as_deref(), Some("x/y"));
    }

    #[test]
    fn test_build_with_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.yaml");
        fs::write(&file, "base: from/file\noutput_format: json\n").unwrap();

        let config = ConfigBuilder::new().with_file(&file).skip_env().build().unwrap();
        assert_eq!(config.base.as_deref(), Some("from/file"));
        assert_eq!(config.format(), OutputFormat::Json);
    }

    #[test]
    fn test_build_overrides_beat_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.yaml");
        fs::write(&file, "base: from/file\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(&file)
            .skip_env()
            .with_config(Config {
                base: Some("from/code".into()),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.base.as_deref(), Some("from/code"));
    }

    #[test]
    fn test_build_rejects_invalid_base() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                base: Some("..".into()),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_missing_explicit_file() {
        let result = ConfigBuilder::new()
            .with_file(Path::new("/nonexistent/segpath.yaml"))
            .skip_env()
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_build_env_beats_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.yaml");
        fs::write(&file, "base: from/file\n").unwrap();

        env::set_var(BASE_ENV, "from/env");
        let result = ConfigBuilder::new().with_file(&file).build();
        env::remove_var(BASE_ENV);

        assert_eq!(result.unwrap().base.as_deref(), Some("from/env"));
    }
}
