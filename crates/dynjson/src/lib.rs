// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dynamically-typed navigation over decoded JSON
//!
//! This crate wraps an already-decoded JSON tree and lets callers walk it
//! without declaring a schema:
//!
//! - [`document`] - Owning root, decode and encode entry points
//! - [`value`] - Borrowed node views, type inspection and typed extraction
//! - [`key`] - Path components and the [`path!`] macro
//! - [`path`] - Textual path expressions such as `users[0].name`
//! - [`decode`] - The parser boundary
//! - [`error`] - Error types and Result alias
//!
//! ```
//! use dynjson::{Document, path};
//!
//! let doc: Document = r#"{"foo": [1, 2, "bar", {"baz": "fred"}]}"#.parse().unwrap();
//!
//! assert_eq!(doc.at(path!["foo", 3, "baz"]).string(), "fred");
//! assert_eq!(doc.at(path!["foo", 0]).number(), 1);
//! assert!(doc.at(["missing"]).at(["deeper"]).is_absent());
//! assert_eq!(doc.at(["missing"]).string_or_default("none"), "none");
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

/// Parser boundary for raw JSON bytes
pub mod decode;
/// Owning document root
pub mod document;
/// Error types for dynjson operations
pub mod error;
/// Path components for traversal
pub mod key;
/// Textual path expressions
pub mod path;
/// Borrowed node views
pub mod value;

// Re-exports for convenience
pub use document::Document;
pub use error::{Error, Result};
pub use key::Key;
pub use path::{ParsedPath, PathSegment};
pub use value::{Value, ValueType};
