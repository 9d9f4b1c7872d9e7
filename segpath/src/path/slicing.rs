//! Slicing helpers over an already-formed path string.
//!
//! These do no resolution: they split on the separator (discarding empty
//! tokens) and pick pieces out of the result.

use super::types::{SEPARATOR, SEPARATOR_STR};

fn tokens(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split(SEPARATOR).filter(|token| !token.is_empty())
}

/// All components except the last, joined with the separator.
///
/// Returns `None` if the path has fewer than two components.
///
/// # Examples
///
/// ```
/// use segpath::path::directory_name;
///
/// assert_eq!(directory_name("a/b/file.txt").as_deref(), Some("a/b"));
/// assert_eq!(directory_name("file.txt"), None);
/// ```
#[must_use]
pub fn directory_name(path: &str) -> Option<String> {
    let parts: Vec<&str> = tokens(path).collect();
    let (_, dir) = parts.split_last()?;

    if dir.is_empty() {
        return None;
    }

    Some(dir.join(SEPARATOR_STR))
}

/// The last component, optionally with its extension removed.
///
/// With `strip_extension`, the name is cut at its last `.`; a name without
/// any `.` is returned whole. Returns `None` only for a path with no
/// components.
///
/// # Examples
///
/// ```
/// use segpath::path::entity_name;
///
/// assert_eq!(entity_name("a/b/file.txt", true), Some("file"));
/// assert_eq!(entity_name("a/b/file.txt", false), Some("file.txt"));
/// assert_eq!(entity_name("a/b/file", true), Some("file"));
/// ```
#[must_use]
pub fn entity_name(path: &str, strip_extension: bool) -> Option<&str> {
    let entity = tokens(path).next_back()?;

    if !strip_extension {
        return Some(entity);
    }

    match entity.rfind('.') {
        Some(dot) => Some(&entity[..dot]),
        None => Some(entity),
    }
}

/// The text after the last `.` in the last component.
///
/// # Examples
///
/// ```
/// use segpath::path::extension_name;
///
/// assert_eq!(extension_name("a/b/file.txt"), Some("txt"));
/// assert_eq!(extension_name("a/b/file"), None);
/// ```
#[must_use]
pub fn extension_name(path: &str) -> Option<&str> {
    let entity = entity_name(path, false)?;
    entity.rfind('.').map(|dot| &entity[dot + 1..])
}
