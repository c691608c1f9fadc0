// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path components for traversal.
//!
//! A [`Key`] is either an object field name or a list index. Only strings and
//! integers convert into a `Key`, so a path containing anything else is
//! rejected at compile time.
//!
//! Mixed paths are most easily written with the [`path!`](crate::path!) macro:
//!
//! ```
//! use dynjson::{Key, path};
//!
//! let keys = path!["users", 0, "name"];
//! assert_eq!(keys[0], Key::Field("users"));
//! assert_eq!(keys[1], Key::Index(0));
//! ```

use std::fmt;

/// One step of a traversal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'k> {
    /// Look up a field of an object.
    Field(&'k str),
    /// Index into a list.
    Index(usize),
}

impl<'k> From<&'k str> for Key<'k> {
    fn from(field: &'k str) -> Self {
        Self::Field(field)
    }
}

impl<'k> From<&'k String> for Key<'k> {
    fn from(field: &'k String) -> Self {
        Self::Field(field.as_str())
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<u32> for Key<'_> {
    fn from(index: u32) -> Self {
        Self::Index(usize::try_from(index).unwrap_or(usize::MAX))
    }
}

// Negative indices can never be in range; map them to an index that always
// misses so they navigate to the absent node.
impl From<i32> for Key<'_> {
    fn from(index: i32) -> Self {
        Self::Index(usize::try_from(index).unwrap_or(usize::MAX))
    }
}

impl From<i64> for Key<'_> {
    fn from(index: i64) -> Self {
        Self::Index(usize::try_from(index).unwrap_or(usize::MAX))
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Build an array of [`Key`]s from a mix of string and integer expressions.
///
/// ```
/// use dynjson::{Document, path};
///
/// let doc: Document = r#"{"a": {"b": [10, 20, {"c": true}]}}"#.parse().unwrap();
/// assert!(doc.at(path!["a", "b", 2, "c"]).bool());
/// assert_eq!(doc.at(path![]), doc.root());
/// ```
#[macro_export]
macro_rules! path {
    () => {{
        let keys: [$crate::Key<'static>; 0] = [];
        keys
    }};
    ($($key:expr),+ $(,)?) => {
        [$($crate::Key::from($key)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let owned = String::from("name");
        assert_eq!(Key::from("name"), Key::Field("name"));
        assert_eq!(Key::from(&owned), Key::Field("name"));
        assert_eq!(Key::from(3usize), Key::Index(3));
        assert_eq!(Key::from(3u32), Key::Index(3));
        assert_eq!(Key::from(3i32), Key::Index(3));
        assert_eq!(Key::from(3i64), Key::Index(3));
    }

    #[test]
    fn test_negative_index_never_matches() {
        assert_eq!(Key::from(-1i32), Key::Index(usize::MAX));
        assert_eq!(Key::from(i64::MIN), Key::Index(usize::MAX));
    }

    #[test]
    fn test_path_macro() {
        let keys = path!["foo", 3, "baz"];
        assert_eq!(
            keys,
            [Key::Field("foo"), Key::Index(3), Key::Field("baz")]
        );
        assert!(path![].is_empty());
    }

    #[test]
    fn test_display() {
        let rendered: String = path!["users", 0, "name"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ".users[0].name");
    }
}
