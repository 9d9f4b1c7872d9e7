//! Path relationship checking.
//!
//! This module determines how two canonical paths relate to each other, such
//! as whether one is an ancestor or descendant of the other. Comparison is
//! component-wise, so `a/bc` is not beneath `a/b`.

use super::types::ResolvedPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use segpath::path::{resolve, Relationship};
///
/// let parent = resolve(["home/user"]).unwrap();
/// let child = resolve(["home/user/project"]).unwrap();
///
/// assert_eq!(Relationship::between(&parent, &child), Relationship::Ancestor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths resolve to the same components.
    Same,

    /// Neither path is beneath the other.
    Unrelated,
}

impl Relationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::{resolve, Relationship};
    ///
    /// let a = resolve(["a"]).unwrap();
    /// let ab = resolve(["a/b"]).unwrap();
    /// let b = resolve(["b"]).unwrap();
    ///
    /// assert_eq!(Relationship::between(&a, &ab), Relationship::Ancestor);
    /// assert_eq!(Relationship::between(&ab, &a), Relationship::Descendant);
    /// assert_eq!(Relationship::between(&a, &a), Relationship::Same);
    /// assert_eq!(Relationship::between(&a, &b), Relationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &ResolvedPath, path2: &ResolvedPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if path2.starts_with(path1) {
            return Self::Ancestor;
        }

        if path1.starts_with(path2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::Relationship;
    ///
    /// assert!(Relationship::Ancestor.is_hierarchical());
    /// assert!(!Relationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within(path: &ResolvedPath, directory: &ResolvedPath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &ResolvedPath, other: &ResolvedPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::path::{resolve, Relationship};
    ///
    /// let p1 = resolve(["a"]).unwrap();
    /// let p2 = resolve(["a/b"]).unwrap();
    ///
    /// let desc = Relationship::Ancestor.description(&p1, &p2);
    /// assert_eq!(desc, "a is an ancestor of a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &ResolvedPath, path2: &ResolvedPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }

    /// Short lowercase name, used for machine-readable output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }
}
