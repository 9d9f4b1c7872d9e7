//! Core types for path handling.
//!
//! This module defines the separator and reserved-token literals, the
//! classification of raw tokens into [`Segment`]s, and the canonical
//! [`ResolvedPath`] produced by resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// [`SEPARATOR`] as a string slice, for joining.
pub const SEPARATOR_STR: &str = "/";

/// Current-directory marker.
pub const CURRENT: &str = ".";

/// Parent-directory marker.
pub const PARENT: &str = "..";

/// A raw token taken from between two separators.
///
/// # Examples
///
/// ```
/// use segpath::path::Segment;
///
/// assert_eq!(Segment::classify("."), Segment::Current);
/// assert_eq!(Segment::classify(".."), Segment::Parent);
/// assert_eq!(Segment::classify("src"), Segment::Named("src"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// The current-directory marker (`.`).
    Current,
    /// The parent-directory marker (`..`).
    Parent,
    /// Any other token.
    Named(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a single token.
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        match token {
            CURRENT => Self::Current,
            PARENT => Self::Parent,
            named => Self::Named(named),
        }
    }
}

/// Split every input string on the separator, discarding empty tokens.
///
/// Consecutive, leading and trailing separators therefore collapse.
///
/// # Examples
///
/// ```
/// use segpath::path::split_segments;
///
/// let tokens: Vec<&str> = split_segments(&["a//b/", "/c"]).collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
pub fn split_segments<S: AsRef<str>>(segments: &[S]) -> impl Iterator<Item = &str> + '_ {
    segments
        .iter()
        .flat_map(|segment| segment.as_ref().split(SEPARATOR))
        .filter(|token| !token.is_empty())
}

/// A canonical path: an ordered sequence of named components.
///
/// A `ResolvedPath` never contains `.` or `..` and never contains an empty
/// component. The empty sequence is the root itself and displays as `.`.
///
/// # Examples
///
/// ```
/// use segpath::path::{resolve, ResolvedPath};
///
/// let resolved = resolve(["a/./b", "../c"]).unwrap();
/// assert_eq!(resolved.components(), ["a", "c"]);
/// assert_eq!(resolved.to_string(), "a/c");
///
/// assert_eq!(ResolvedPath::root().to_string(), ".");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolvedPath {
    components: Vec<String>,
}

impl ResolvedPath {
    /// The root path (no components).
    #[must_use]
    pub const fn root() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Build from components that are already known to be canonical.
    pub(crate) fn from_components(components: Vec<String>) -> Self {
        debug_assert!(components
            .iter()
            .all(|c| !c.is_empty() && c != CURRENT && c != PARENT && !c.contains(SEPARATOR)));
        Self { components }
    }

    /// The named components, in order.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Alias for [`is_root`](Self::is_root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// The last component, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Length of the longest common component prefix with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::resolve;
    ///
    /// let a = resolve(["a/b/c"]).unwrap();
    /// let b = resolve(["a/b/d/e"]).unwrap();
    /// assert_eq!(a.common_prefix_len(&b), 2);
    /// ```
    #[must_use]
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        self.components
            .iter()
            .zip(&other.components)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Whether every component of `prefix` leads this path.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.components.starts_with(&prefix.components)
    }

    /// The enclosing path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.components.split_last()?;
        Some(Self::from_components(init.to_vec()))
    }

    /// Resolve further segments starting from this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the segments ascend past the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::resolve;
    ///
    /// let base = resolve(["a/b"]).unwrap();
    /// assert_eq!(base.join(["../c"]).unwrap().to_string(), "a/c");
    /// assert!(base.join(["../../.."]).is_err());
    /// ```
    pub fn join<I, S>(&self, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all: Vec<String> = self.components.clone();
        all.extend(segments.into_iter().map(|s| s.as_ref().to_string()));
        super::resolve::resolve(all)
    }

    /// The tokens that lead from this path to `to`.
    ///
    /// The result holds `..` once for every component of `self` past the
    /// common prefix, followed by the components of `to` past that prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCommonRoot`] if the paths share no prefix and this
    /// path is not the root.
    pub fn relative_to<'a>(&'a self, to: &'a Self) -> Result<Vec<&'a str>> {
        let common = self.common_prefix_len(to);

        if common == 0 && !self.is_root() {
            return Err(Error::NoCommonRoot {
                from: self.to_string(),
                to: to.to_string(),
            });
        }

        let uppers = self.len() - common;
        let mut tokens = Vec::with_capacity(uppers + to.len() - common);
        tokens.extend(std::iter::repeat(PARENT).take(uppers));
        tokens.extend(to.components[common..].iter().map(String::as_str));
        Ok(tokens)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str(CURRENT);
        }

        let mut first = true;
        for component in &self.components {
            if !first {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(component)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for ResolvedPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        super::resolve::resolve([s])
    }
}

impl From<ResolvedPath> for Vec<String> {
    fn from(path: ResolvedPath) -> Self {
        path.components
    }
}
