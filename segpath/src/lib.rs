#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # segpath
//!
//! Normalization and relative computation for slash-separated paths.
//!
//! Paths handled here are virtual: `/`-separated segment strings rooted at
//! an implicit root, independent of any filesystem. The library resolves
//! `.` and `..`, computes relative paths between resolved forms, and offers
//! a scoped [`Path`] value that runs the same algebra beneath a fixed base.
//!
//! ## Core Types
//!
//! - [`ResolvedPath`]: Canonical component sequence
//! - [`Path`]: Immutable canonical path with scoped operations
//! - [`Relationship`]: Component-wise relation between two paths
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//!
//! ## Examples
//!
//! ```
//! use segpath::{path, relative, Path};
//!
//! assert_eq!(path(["a/b", "../c", "./d"]).unwrap(), "a/c/d");
//! assert_eq!(relative(["a/b/c"], ["a/d"]).unwrap(), "./../../d");
//!
//! let base = Path::new(["site"]).unwrap();
//! assert_eq!(base.path(["assets/app.css"]).unwrap(), "site/assets/app.css");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormatter, Report};
pub use path::{
    directory_name, entity_name, extension_name, path, relative, resolve, within, Path,
    Relationship, ResolvedPath,
};
