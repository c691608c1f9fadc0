// SPDX-License-Identifier: MIT OR Apache-2.0
//! Owning root of a decoded JSON document.
//!
//! A [`Document`] owns the decoded tree; [`Document::root`] hands out
//! borrowed [`Value`] views for navigation. Encoding a document reproduces
//! the decoded content. `serde_json` orders object keys, so a document whose
//! keys were already sorted round-trips byte for byte:
//!
//! ```
//! use dynjson::Document;
//!
//! let text = r#"{"bar":{"int":4,"sub":"val"},"baz":3,"foo":"bar"}"#;
//! let doc = Document::from_slice(text.as_bytes()).unwrap();
//! assert_eq!(doc.to_json_string(), text);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::decode;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::Value;

/// A decoded JSON document.
///
/// Deserializes from and serializes to exactly the JSON it holds, so it can
/// be embedded in other serde types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: JsonValue,
}

impl Document {
    /// Decode a document from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error if `bytes` is not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        decode::from_slice(bytes).map(Self::from_json)
    }

    /// Wrap an already decoded tree.
    #[must_use]
    pub const fn from_json(root: JsonValue) -> Self {
        Self { root }
    }

    /// A view of the root node.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> Value<'_> {
        Value::new(&self.root)
    }

    /// Shortcut for `self.root().at(keys)`.
    #[must_use]
    pub fn at<'k, I>(&self, keys: I) -> Value<'_>
    where
        I: IntoIterator,
        I::Item: Into<Key<'k>>,
    {
        self.root().at(keys)
    }

    /// Shortcut for `self.root().at_or_error(keys)`.
    ///
    /// # Errors
    ///
    /// See [`Value::at_or_error`].
    pub fn at_or_error<'k, I>(&self, keys: I) -> Result<Value<'_>>
    where
        I: IntoIterator,
        I::Item: Into<Key<'k>>,
    {
        self.root().at_or_error(keys)
    }

    /// Borrow the decoded tree.
    #[must_use]
    pub const fn as_json(&self) -> &JsonValue {
        &self.root
    }

    /// Take the decoded tree.
    #[must_use]
    pub fn into_json(self) -> JsonValue {
        self.root
    }

    /// Encode as compact JSON.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.root.to_string()
    }

    /// Encode as indented JSON.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        format!("{:#}", self.root)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<JsonValue> for Document {
    fn from(root: JsonValue) -> Self {
        Self::from_json(root)
    }
}
