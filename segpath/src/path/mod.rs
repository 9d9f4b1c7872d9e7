//! Slash-separated path algebra.
//!
//! This module normalizes sequences of path segments into a canonical form
//! and computes relative paths between canonical forms. Paths here are
//! virtual: nothing touches the filesystem.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! [`resolve`] concatenates segments, splits them on `/`, discards empty
//! tokens, skips `.` and lets `..` remove the previous component. The
//! result is a [`ResolvedPath`] rooted at an implicit root. Ascending past
//! that root is an error.
//!
//! ## Relative paths
//!
//! [`relative`] finds the longest common component prefix of two resolved
//! paths and walks from one to the other. Two non-root paths with nothing
//! in common are rejected.
//!
//! ## Scoped paths
//!
//! [`Path`] wraps a canonical string and runs the same operations beneath
//! it, so callers can hand out a scope and resolve within it.
//!
//! # Examples
//!
//! ```
//! use segpath::path::{path, relative, Path};
//!
//! assert_eq!(path(["a", "..", "b"]).unwrap(), "b");
//! assert_eq!(relative(["a/b"], ["a/c"]).unwrap(), "./../c");
//!
//! let scope = Path::new(["workspace"]).unwrap();
//! assert_eq!(scope.path(["crate/src"]).unwrap(), "workspace/crate/src");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use segpath::path::{resolve, Relationship};
//!
//! let parent = resolve(["home/user"]).unwrap();
//! let child = resolve(["home/user/project"]).unwrap();
//!
//! let rel = Relationship::between(&parent, &child);
//! assert_eq!(rel, Relationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod relationship;
pub mod relative;
pub mod resolve;
pub mod scope;
pub mod slicing;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::Relationship;
pub use relative::relative;
pub use resolve::{path, resolve};
pub use scope::{within, Path};
pub use slicing::{directory_name, entity_name, extension_name};
pub use types::{
    split_segments, ResolvedPath, Segment, CURRENT, PARENT, SEPARATOR, SEPARATOR_STR,
};
