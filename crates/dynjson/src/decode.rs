// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parser boundary for raw JSON bytes.
//!
//! Every decode in the crate goes through [`from_slice`], so the choice of
//! parser lives in one place. `serde_json` is used by default; enabling the
//! `simd` feature switches to `simd-json`, which needs a mutable buffer and
//! therefore copies the input once.
//!
//! Decoder errors are returned as-is inside [`Error`](crate::Error); no extra
//! validation is applied to the decoded tree.

use serde_json::Value as JsonValue;

use crate::error::Result;

/// Decode a complete JSON document.
///
/// # Errors
///
/// Returns the decoder's error wrapped in [`Error::Decode`](crate::Error::Decode)
/// (or `SimdDecode` with the `simd` feature) when the input is not valid JSON.
#[cfg(not(feature = "simd"))]
pub fn from_slice(bytes: &[u8]) -> Result<JsonValue> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a complete JSON document.
///
/// # Errors
///
/// Returns the decoder's error wrapped in
/// [`Error::SimdDecode`](crate::Error::SimdDecode) when the input is not
/// valid JSON.
#[cfg(feature = "simd")]
pub fn from_slice(bytes: &[u8]) -> Result<JsonValue> {
    let mut buffer = bytes.to_vec();
    Ok(simd_json::serde::from_slice(&mut buffer)?)
}
