//! The [`Path`] value type.
//!
//! A `Path` holds one canonical path string and offers the path algebra
//! scoped beneath it. It is never mutated; every operation that moves
//! somewhere else returns a new value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::relative::relative;
use super::resolve::{path, resolve};
use super::slicing::{directory_name, entity_name, extension_name};
use super::types::{ResolvedPath, CURRENT, SEPARATOR};

/// An immutable canonical path.
///
/// # Examples
///
/// ```
/// use segpath::path::Path;
///
/// let project = Path::new(["projects", "./demo"]).unwrap();
/// assert_eq!(project.as_str(), "projects/demo");
///
/// let src = project.within(["src"]).unwrap();
/// assert_eq!(src.as_str(), "projects/demo/src");
///
/// assert_eq!(src.relative_to(["projects/demo/docs"]).unwrap(), "./../docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path {
    current: String,
}

impl Path {
    /// Resolve segments into a new `Path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if resolution ascends past the root.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            current: path(segments)?,
        })
    }

    /// The root path, rendered as `.`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            current: CURRENT.to_string(),
        }
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.current
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.current == CURRENT
    }

    /// The canonical component sequence.
    #[must_use]
    pub fn resolved(&self) -> ResolvedPath {
        if self.is_root() {
            return ResolvedPath::root();
        }

        ResolvedPath::from_components(
            self.current
                .split(SEPARATOR)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Resolve segments beneath this path and render the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the segments climb above the root.
    /// Climbing above this path itself is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::Path;
    ///
    /// let base = Path::new(["a/b"]).unwrap();
    /// assert_eq!(base.path(["c"]).unwrap(), "a/b/c");
    /// assert_eq!(base.path([".."]).unwrap(), "a");
    /// ```
    pub fn path<I, S>(&self, segments: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scoped(segments).map(|resolved| resolved.to_string())
    }

    /// A new `Path` for segments resolved beneath this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the segments climb above the root.
    pub fn within<I, S>(&self, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scoped(segments).map(Self::from)
    }

    /// The relative path from this path to an absolute target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCommonRoot`] if the target shares nothing with
    /// this path, or [`Error::OutOfBounds`] if it fails to resolve.
    pub fn relative_to<I, S>(&self, to: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        relative([self.current.as_str()], to)
    }

    /// The relative path between two paths, both resolved beneath this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either side climbs above the root,
    /// or [`Error::NoCommonRoot`] if either side climbs out of this path
    /// onto an unrelated branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::Path;
    ///
    /// let base = Path::new(["repo"]).unwrap();
    /// assert_eq!(base.relative_within(["src/lib"], ["docs"]).unwrap(), "./../../docs");
    /// ```
    pub fn relative_within<F, T, S, U>(&self, from: F, to: T) -> Result<String>
    where
        F: IntoIterator<Item = S>,
        T: IntoIterator<Item = U>,
        S: AsRef<str>,
        U: AsRef<str>,
    {
        relative([self.path(from)?], [self.path(to)?])
    }

    /// See [`directory_name`].
    #[must_use]
    pub fn directory_name(&self) -> Option<String> {
        directory_name(&self.current)
    }

    /// See [`entity_name`]. The root has no entity name.
    #[must_use]
    pub fn entity_name(&self, strip_extension: bool) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        entity_name(&self.current, strip_extension)
    }

    /// See [`extension_name`].
    #[must_use]
    pub fn extension_name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        extension_name(&self.current)
    }

    fn scoped<I, S>(&self, segments: I) -> Result<ResolvedPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<S> = segments.into_iter().collect();
        let mut all: Vec<&str> = Vec::with_capacity(segments.len() + 1);
        all.push(&self.current);
        all.extend(segments.iter().map(|s| s.as_ref()));
        resolve(all)
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl From<ResolvedPath> for Path {
    fn from(resolved: ResolvedPath) -> Self {
        Self {
            current: resolved.to_string(),
        }
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.current
    }
}

impl TryFrom<String> for Path {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new([value])
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new([s])
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.current
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}

/// Resolve segments into a new [`Path`].
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if resolution ascends past the root.
///
/// # Examples
///
/// ```
/// use segpath::path::within;
///
/// let scope = within(["a", "b/../c"]).unwrap();
/// assert_eq!(scope.as_str(), "a/c");
/// ```
pub fn within<I, S>(segments: I) -> Result<Path>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Path::new(segments)
}
