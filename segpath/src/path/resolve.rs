//! Path resolution.
//!
//! Resolution concatenates segments, splits them on the separator, and
//! reduces the tokens left to right:
//! - `.` is skipped
//! - `..` pops the last component, failing at the root
//! - anything else is pushed as a named component

use crate::error::{Error, Result};

use super::types::{split_segments, ResolvedPath, Segment, SEPARATOR};

/// Resolve a sequence of segments into a canonical path.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if a `..` token is processed when no
/// component remains to remove.
///
/// # Examples
///
/// ```
/// use segpath::path::resolve;
///
/// let resolved = resolve(["a", "..", "b"]).unwrap();
/// assert_eq!(resolved.components(), ["b"]);
///
/// // Resolves to the root
/// assert!(resolve(["a/.."]).unwrap().is_root());
///
/// // Ascending past the root fails
/// assert!(resolve(["a", "..", ".."]).is_err());
/// ```
pub fn resolve<I, S>(segments: I) -> Result<ResolvedPath>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let segments: Vec<S> = segments.into_iter().collect();
    let mut components: Vec<String> = Vec::new();

    for token in split_segments(&segments) {
        match Segment::classify(token) {
            Segment::Current => {}
            Segment::Parent => {
                if components.pop().is_none() {
                    let path = join_input(&segments);
                    log::debug!("resolution of '{path}' escapes the root");
                    return Err(Error::OutOfBounds { path });
                }
            }
            Segment::Named(name) => components.push(name.to_string()),
        }
    }

    let resolved = ResolvedPath::from_components(components);
    log::trace!("resolved {} segment(s) to '{resolved}'", segments.len());
    Ok(resolved)
}

/// Resolve segments and render the canonical string.
///
/// The root renders as `.`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if resolution ascends past the root.
///
/// # Examples
///
/// ```
/// use segpath::path::path;
///
/// assert_eq!(path(["a/b", "../c"]).unwrap(), "a/c");
/// assert_eq!(path(["a", ".."]).unwrap(), ".");
/// assert_eq!(path(Vec::<&str>::new()).unwrap(), ".");
/// ```
pub fn path<I, S>(segments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve(segments).map(|resolved| resolved.to_string())
}

fn join_input<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}
