// SPDX-License-Identifier: MIT OR Apache-2.0
//! Borrowed views over nodes of a decoded JSON tree.
//!
//! A [`Value`] is a copyable view of one node. Navigating into a child
//! synthesizes a fresh view on demand; nothing is cached, and two views of the
//! same node compare equal.
//!
//! A view may also be *absent*: the result of looking up something that is not
//! there. The absent node reports [`ValueType::Null`], like a JSON `null`, so
//! optional data reads the same whether it is missing or explicitly null.
//! [`Value::is_absent`] tells the two apart when that matters.
//!
//! # Accessor tiers
//!
//! Every scalar type has three accessors:
//!
//! - `<type>_or_error()` returns a [`Result`]
//! - `<type>()` panics when the value is absent or has another type
//! - `<type>_or_default(d)` returns `d` instead of failing
//!
//! ```
//! use dynjson::Document;
//!
//! let doc: Document = r#"{"count": 12.7, "name": "fred"}"#.parse().unwrap();
//! let root = doc.root();
//!
//! assert_eq!(root.get("count").number(), 12);
//! assert!(root.get("name").number_or_error().is_err());
//! assert_eq!(root.get("nope").number_or_default(-1), -1);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};
use tracing::trace;

use crate::error::{Error, Result};
use crate::key::Key;

/// The shape of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// JSON `null`, or an absent node.
    Null,
    /// Any JSON number.
    Number,
    /// A UTF-8 string.
    String,
    /// `true` or `false`.
    Bool,
    /// A mapping from string keys to values.
    Object,
    /// An ordered sequence of values.
    List,
}

impl ValueType {
    /// Classify a decoded JSON node.
    #[must_use]
    pub const fn of(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Bool,
            JsonValue::Number(_) => Self::Number,
            JsonValue::String(_) => Self::String,
            JsonValue::Array(_) => Self::List,
            JsonValue::Object(_) => Self::Object,
        }
    }

    /// Lowercase name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view of one node of a decoded JSON document, or of a node that does
/// not exist.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Value<'a> {
    /// `None` for the absent node.
    data: Option<&'a JsonValue>,
}

impl<'a> Value<'a> {
    /// Wrap a decoded node.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a JsonValue) -> Self {
        Self { data: Some(data) }
    }

    /// The absent node.
    #[inline]
    #[must_use]
    pub const fn absent() -> Self {
        Self { data: None }
    }

    /// The underlying decoded node, if present.
    #[inline]
    #[must_use]
    pub const fn as_json(self) -> Option<&'a JsonValue> {
        self.data
    }

    /// True only for the absent node. A present JSON `null` is not absent.
    #[inline]
    #[must_use]
    pub const fn is_absent(self) -> bool {
        self.data.is_none()
    }

    // =========================================================================
    // Type inspection
    // =========================================================================

    /// The type of this node. The absent node reports [`ValueType::Null`].
    #[must_use]
    pub const fn value_type(self) -> ValueType {
        match self.data {
            Some(json) => ValueType::of(json),
            None => ValueType::Null,
        }
    }

    /// True for objects.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self.value_type(), ValueType::Object)
    }

    /// True for numbers.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self.value_type(), ValueType::Number)
    }

    /// True for strings.
    #[must_use]
    pub const fn is_string(self) -> bool {
        matches!(self.value_type(), ValueType::String)
    }

    /// True for JSON `null` and for the absent node.
    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self.value_type(), ValueType::Null)
    }

    /// True for lists.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self.value_type(), ValueType::List)
    }

    /// True for booleans.
    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self.value_type(), ValueType::Bool)
    }

    // =========================================================================
    // Path traversal
    // =========================================================================

    /// Follow `keys` from this node.
    ///
    /// Field keys look up object entries and index keys index into lists.
    /// An empty path returns `self`.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] when a field key meets a non-object or an
    ///   index key meets a non-list
    /// - [`Error::KeyNotFound`] / [`Error::IndexOutOfBounds`] when a step
    ///   misses; a negative index always misses and reports as
    ///   `negative index`
    /// - [`Error::Absent`] when keys remain after reaching the absent node
    pub fn at_or_error<'k, I>(self, keys: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Key<'k>>,
    {
        keys.into_iter()
            .try_fold(self, |node, key| node.step(key.into()))
    }

    /// Follow `keys` from this node, yielding the absent node on any failure.
    ///
    /// `v.at(path!["a", 1])` is the same as `v.at(["a"]).at([1])`; once a
    /// step is absent every further step stays absent.
    #[must_use]
    pub fn at<'k, I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key<'k>>,
    {
        match self.at_or_error(keys) {
            Ok(node) => node,
            Err(err) => {
                trace!(%err, "navigation fell back to absent node");
                Self::absent()
            }
        }
    }

    /// Single-step [`at`](Self::at).
    #[must_use]
    pub fn get<'k>(self, key: impl Into<Key<'k>>) -> Self {
        self.at([key.into()])
    }

    fn step(self, key: Key<'_>) -> Result<Self> {
        let data = self.payload()?;
        match (key, data) {
            (Key::Field(name), JsonValue::Object(map)) => {
                map.get(name).map(Self::new).ok_or_else(|| Error::KeyNotFound {
                    key: name.to_owned(),
                })
            }
            (Key::Index(index), JsonValue::Array(items)) => {
                items.get(index).map(Self::new).ok_or(Error::IndexOutOfBounds {
                    index,
                    len: items.len(),
                })
            }
            (Key::Field(_), other) => Err(mismatch(ValueType::Object, other)),
            (Key::Index(_), other) => Err(mismatch(ValueType::List, other)),
        }
    }

    #[inline]
    fn payload(self) -> Result<&'a JsonValue> {
        self.data.ok_or(Error::Absent)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// The string payload.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn string_or_error(self) -> Result<&'a str> {
        match self.payload()? {
            JsonValue::String(s) => Ok(s.as_str()),
            other => Err(mismatch(ValueType::String, other)),
        }
    }

    /// The string payload.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not a string.
    #[track_caller]
    #[must_use]
    pub fn string(self) -> &'a str {
        expect_present(self.string_or_error())
    }

    /// The string payload, or `default`.
    #[must_use]
    pub fn string_or_default<'d>(self, default: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.string_or_error().unwrap_or(default)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// The numeric payload as an integer, truncated toward zero.
    ///
    /// Values outside the `i64` range saturate.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn number_or_error(self) -> Result<i64> {
        match self.payload()? {
            JsonValue::Number(n) => Ok(truncate(n)),
            other => Err(mismatch(ValueType::Number, other)),
        }
    }

    /// The numeric payload as an integer, truncated toward zero.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not a number.
    #[track_caller]
    #[must_use]
    pub fn number(self) -> i64 {
        expect_present(self.number_or_error())
    }

    /// The numeric payload as an integer, or `default`.
    #[must_use]
    pub fn number_or_default(self, default: i64) -> i64 {
        self.number_or_error().unwrap_or(default)
    }

    /// Like [`number_or_error`](Self::number_or_error), narrowed to the
    /// platform's native width.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn int_or_error(self) -> Result<isize> {
        self.number_or_error().map(|n| {
            isize::try_from(n).unwrap_or(if n < 0 { isize::MIN } else { isize::MAX })
        })
    }

    /// Like [`number`](Self::number), narrowed to the platform's native width.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not a number.
    #[track_caller]
    #[must_use]
    pub fn int(self) -> isize {
        expect_present(self.int_or_error())
    }

    /// Like [`number_or_default`](Self::number_or_default), narrowed to the
    /// platform's native width.
    #[must_use]
    pub fn int_or_default(self, default: isize) -> isize {
        self.int_or_error().unwrap_or(default)
    }

    /// The numeric payload as a float, without truncation.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn float_or_error(self) -> Result<f64> {
        match self.payload()? {
            JsonValue::Number(n) => Ok(n.as_f64().unwrap_or_default()),
            other => Err(mismatch(ValueType::Number, other)),
        }
    }

    /// The numeric payload as a float.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not a number.
    #[track_caller]
    #[must_use]
    pub fn float(self) -> f64 {
        expect_present(self.float_or_error())
    }

    /// The numeric payload as a float, or `default`.
    #[must_use]
    pub fn float_or_default(self, default: f64) -> f64 {
        self.float_or_error().unwrap_or(default)
    }

    // =========================================================================
    // Booleans
    // =========================================================================

    /// The boolean payload.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn bool_or_error(self) -> Result<bool> {
        match self.payload()? {
            JsonValue::Bool(b) => Ok(*b),
            other => Err(mismatch(ValueType::Bool, other)),
        }
    }

    /// The boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not a boolean.
    #[track_caller]
    #[must_use]
    pub fn bool(self) -> bool {
        expect_present(self.bool_or_error())
    }

    /// The boolean payload, or `default`.
    #[must_use]
    pub fn bool_or_default(self, default: bool) -> bool {
        self.bool_or_error().unwrap_or(default)
    }

    // =========================================================================
    // Containers
    // =========================================================================

    /// Every entry of an object, each child wrapped in a fresh view.
    ///
    /// Builds the whole map on every call (O(entries)); callers that read
    /// the same object repeatedly should keep the result.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn map_or_error(self) -> Result<BTreeMap<&'a str, Self>> {
        match self.payload()? {
            JsonValue::Object(map) => Ok(map
                .iter()
                .map(|(key, child)| (key.as_str(), Self::new(child)))
                .collect()),
            other => Err(mismatch(ValueType::Object, other)),
        }
    }

    /// Every entry of an object.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not an object.
    #[track_caller]
    #[must_use]
    pub fn map(self) -> BTreeMap<&'a str, Self> {
        expect_present(self.map_or_error())
    }

    /// Every element of a list, each wrapped in a fresh view.
    ///
    /// Builds the whole vector on every call (O(length)).
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn list_or_error(self) -> Result<Vec<Self>> {
        match self.payload()? {
            JsonValue::Array(items) => Ok(items.iter().map(Self::new).collect()),
            other => Err(mismatch(ValueType::List, other)),
        }
    }

    /// Every element of a list.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not a list.
    #[track_caller]
    #[must_use]
    pub fn list(self) -> Vec<Self> {
        expect_present(self.list_or_error())
    }

    /// The keys of an object in lexicographic order.
    ///
    /// # Errors
    ///
    /// [`Error::Absent`] or [`Error::TypeMismatch`].
    pub fn keys_sorted_or_error(self) -> Result<Vec<&'a str>> {
        match self.payload()? {
            JsonValue::Object(map) => {
                let mut keys: Vec<&'a str> = map.keys().map(String::as_str).collect();
                keys.sort_unstable();
                Ok(keys)
            }
            other => Err(mismatch(ValueType::Object, other)),
        }
    }

    /// The keys of an object in lexicographic order.
    ///
    /// # Panics
    ///
    /// Panics if the node is absent or not an object.
    #[track_caller]
    #[must_use]
    pub fn keys_sorted(self) -> Vec<&'a str> {
        expect_present(self.keys_sorted_or_error())
    }
}

impl<'a> From<&'a JsonValue> for Value<'a> {
    fn from(data: &'a JsonValue) -> Self {
        Self::new(data)
    }
}

/// Encodes the payload unchanged; the absent node encodes as `null`.
impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.data {
            Some(json) => json.serialize(serializer),
            None => serializer.serialize_unit(),
        }
    }
}

/// Compact JSON; `{:#}` pretty-prints.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            Some(json) => fmt::Display::fmt(json, f),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            Some(json) => write!(f, "Value({json})"),
            None => f.write_str("Value::Absent"),
        }
    }
}

const fn mismatch(expected: ValueType, found: &JsonValue) -> Error {
    Error::TypeMismatch {
        expected,
        found: ValueType::of(found),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(n: &Number) -> i64 {
    // Float-to-int `as` truncates toward zero and saturates at the bounds.
    n.as_i64()
        .unwrap_or_else(|| n.as_f64().map_or(0, |f| f as i64))
}

#[track_caller]
fn expect_present<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("dynjson: {err}"),
    }
}
