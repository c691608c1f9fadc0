// SPDX-License-Identifier: MIT OR Apache-2.0
//! Textual path expressions.
//!
//! Paths that arrive as text (command lines, config files, user input) are
//! parsed into a [`ParsedPath`] instead of being trusted as keys:
//!
//! | Text              | Segments                          |
//! |-------------------|-----------------------------------|
//! | `""` or `"."`     | none (the root)                   |
//! | `users`           | `Field("users")`                  |
//! | `users[0].name`   | `Field("users")`, `Index(0)`, `Field("name")` |
//! | `.users[0]`       | `Field("users")`, `Index(0)`      |
//! | `[2][0]`          | `Index(2)`, `Index(0)`            |
//!
//! Malformed text is reported as [`Error::InvalidPath`], never a panic.
//!
//! ```
//! use dynjson::{Document, ParsedPath};
//!
//! let doc: Document = r#"{"users": [{"name": "Amy"}, {"name": "Bob"}]}"#.parse().unwrap();
//! let path: ParsedPath = "users[1].name".parse().unwrap();
//! assert_eq!(doc.at(&path).string(), "Bob");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::key::Key;

/// One owned step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object field name
    Field(String),
    /// List index
    Index(usize),
}

impl<'k> From<&'k PathSegment> for Key<'k> {
    fn from(segment: &'k PathSegment) -> Self {
        match segment {
            PathSegment::Field(name) => Key::Field(name),
            PathSegment::Index(index) => Key::Index(*index),
        }
    }
}

/// A path parsed from text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    segments: Vec<PathSegment>,
}

impl ParsedPath {
    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for empty field names, unterminated or
    /// non-numeric indices, and stray characters after `]`.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let mut segments = Vec::new();
        let mut pos = usize::from(bytes.first() == Some(&b'.'));

        while pos < bytes.len() {
            if bytes[pos] == b'[' {
                let start = pos + 1;
                let len = bytes[start..]
                    .iter()
                    .position(|&b| b == b']')
                    .ok_or_else(|| invalid(pos, "unterminated index"))?;
                segments.push(PathSegment::Index(parse_index(text, start, len)?));
                pos = start + len + 1;
                match bytes.get(pos) {
                    None | Some(b'[') => {}
                    Some(b'.') => pos = skip_separator(bytes, pos)?,
                    Some(_) => return Err(invalid(pos, "expected '.' or '[' after index")),
                }
            } else {
                let len = bytes[pos..]
                    .iter()
                    .position(|&b| b == b'.' || b == b'[')
                    .unwrap_or(bytes.len() - pos);
                if len == 0 {
                    return Err(invalid(pos, "empty field name"));
                }
                segments.push(PathSegment::Field(text[pos..pos + len].to_owned()));
                pos += len;
                if bytes.get(pos) == Some(&b'.') {
                    pos = skip_separator(bytes, pos)?;
                }
            }
        }

        Ok(Self { segments })
    }

    /// The parsed segments.
    #[must_use]
    pub const fn segments(&self) -> &[PathSegment] {
        self.segments.as_slice()
    }

    /// Borrowed keys, ready for [`Value::at`](crate::Value::at).
    pub fn iter<'p>(&'p self) -> SegmentKeys<'p> {
        self.segments
            .iter()
            .map(Key::from as fn(&'p PathSegment) -> Key<'p>)
    }

    /// Same as [`iter`](Self::iter).
    pub fn keys(&self) -> SegmentKeys<'_> {
        self.iter()
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root path.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Iterator over the keys of a [`ParsedPath`].
pub type SegmentKeys<'p> =
    std::iter::Map<std::slice::Iter<'p, PathSegment>, fn(&'p PathSegment) -> Key<'p>>;

impl<'p> IntoIterator for &'p ParsedPath {
    type Item = Key<'p>;
    type IntoIter = SegmentKeys<'p>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PathSegment> for ParsedPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl FromStr for ParsedPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Canonical form: `users[0].name`; the root renders as `.`.
impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(".");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

const fn invalid(position: usize, reason: &'static str) -> Error {
    Error::InvalidPath { position, reason }
}

/// Step over a `.` at `pos`, rejecting a trailing separator.
const fn skip_separator(bytes: &[u8], pos: usize) -> Result<usize> {
    let next = pos + 1;
    if next == bytes.len() {
        return Err(invalid(next, "empty field name"));
    }
    Ok(next)
}

fn parse_index(text: &str, start: usize, len: usize) -> Result<usize> {
    let digits = &text[start..start + len];
    if digits.is_empty() {
        return Err(invalid(start, "empty index"));
    }
    if let Some(bad) = digits.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(invalid(
            start + bad,
            "index must be a non-negative integer",
        ));
    }
    digits
        .parse()
        .map_err(|_| invalid(start, "index out of range"))
}
