//! Relative path computation.

use crate::error::Result;

use super::resolve::resolve;
use super::types::{CURRENT, SEPARATOR};

/// Compute the relative path from one path to another.
///
/// Both sides are resolved independently. The result is `.` when they are
/// equal, otherwise `./` followed by one `..` per component of `from` past
/// the common prefix and then the rest of `to`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if either side
/// fails to resolve, and [`Error::NoCommonRoot`](crate::Error::NoCommonRoot)
/// if the paths share no prefix while `from` is not the root.
///
/// # Examples
///
/// ```
/// use segpath::path::relative;
///
/// assert_eq!(relative(["a/b"], ["a/c"]).unwrap(), "./../c");
/// assert_eq!(relative(["a/b"], ["a/b"]).unwrap(), ".");
/// assert_eq!(relative(["."], ["x/y"]).unwrap(), "./x/y");
/// assert!(relative(["a/b"], ["x/y"]).is_err());
/// ```
pub fn relative<F, T, S, U>(from: F, to: T) -> Result<String>
where
    F: IntoIterator<Item = S>,
    T: IntoIterator<Item = U>,
    S: AsRef<str>,
    U: AsRef<str>,
{
    let from = resolve(from)?;
    let to = resolve(to)?;
    let tokens = from.relative_to(&to)?;

    if tokens.is_empty() {
        return Ok(CURRENT.to_string());
    }

    let mut result = String::from(CURRENT);
    for token in tokens {
        result.push(SEPARATOR);
        result.push_str(token);
    }
    Ok(result)
}
