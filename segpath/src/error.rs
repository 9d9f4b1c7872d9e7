//! Error types for the segpath library.
//!
//! This module provides the error hierarchy for every fallible operation in
//! segpath, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a segpath error.
///
/// # Examples
///
/// ```
/// use segpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("a/b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the segpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A parent-directory marker was processed with nothing left to pop.
    #[error("cannot resolve path '{path}': attempted to go beyond the root directory")]
    OutOfBounds {
        /// The joined input that failed to resolve.
        path: String,
    },

    /// Two paths have no common prefix and the starting path is not the root.
    #[error("cannot compute relative path from '{from}' to '{to}': paths do not share a common root")]
    NoCommonRoot {
        /// The resolved starting path.
        from: String,
        /// The resolved target path.
        to: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates an attempt to ascend past the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    ///
    /// let err = Error::OutOfBounds { path: "a/../..".to_string() };
    /// assert!(err.is_out_of_bounds());
    /// ```
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Check if error indicates two unrelated paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    ///
    /// let err = Error::NoCommonRoot { from: "a".to_string(), to: "b".to_string() };
    /// assert!(err.is_no_common_root());
    /// ```
    #[must_use]
    pub fn is_no_common_root(&self) -> bool {
        matches!(self, Self::NoCommonRoot { .. })
    }

    /// Check if error comes from path algebra rather than configuration or I/O.
    #[must_use]
    pub fn is_path_error(&self) -> bool {
        self.is_out_of_bounds() || self.is_no_common_root()
    }
}
