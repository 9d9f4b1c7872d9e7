//! Configuration system for segpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `segpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (SEGPATH_*)
//! 3. Project config (`segpath.yaml`, nearest ancestor) or an explicit file
//! 4. User config (`~/.segpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use segpath::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     base: Some("srv/app".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base, Some("srv/app".to_string()));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
