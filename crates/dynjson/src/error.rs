// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for dynjson operations.

use crate::value::ValueType;
use thiserror::Error;

/// Error type for navigation, extraction and decoding.
#[derive(Debug, Error)]
pub enum Error {
    // Absent data
    /// The node does not exist.
    #[error("no such key")]
    Absent,
    /// An object has no entry for the requested key.
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// The missing key
        key: String,
    },
    /// A list index is past the end of the list. Negative indices arrive
    /// here as `usize::MAX`.
    #[error("{} out of bounds (length={len})", describe_index(.index))]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the list
        len: usize,
    },

    // Shape errors
    /// The node exists but holds a different type than requested.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The type the caller asked for
        expected: ValueType,
        /// The type actually present
        found: ValueType,
    },

    // Path text errors
    /// A textual path expression could not be parsed.
    #[error("invalid path at byte {position}: {reason}")]
    InvalidPath {
        /// Byte offset of the offending character
        position: usize,
        /// What went wrong
        reason: &'static str,
    },

    // Decoder errors
    /// The JSON decoder rejected the input.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// The SIMD JSON decoder rejected the input.
    #[cfg(feature = "simd")]
    #[error("JSON decode error: {0}")]
    SimdDecode(#[from] simd_json::Error),
}

impl Error {
    /// Returns true when the error means "there is nothing here", as opposed
    /// to a shape mismatch or a decode failure.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(
            self,
            Self::Absent | Self::KeyNotFound { .. } | Self::IndexOutOfBounds { .. }
        )
    }

    /// Returns true when the node exists but has the wrong type.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_index(index: &usize) -> String {
    if *index == usize::MAX {
        "negative index".to_string()
    } else {
        format!("index {index}")
    }
}

/// Result type alias for dynjson operations.
pub type Result<T> = std::result::Result<T, Error>;
