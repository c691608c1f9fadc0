#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for textual path parsing.
//!
//! Arbitrary text must either fail with `InvalidPath` or parse into a path
//! whose canonical rendering parses back to the same segments.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_path_parse

use dynjson::{Error, ParsedPath};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match ParsedPath::parse(text) {
        Ok(path) => {
            let canonical = path.to_string();
            let reparsed = ParsedPath::parse(&canonical)
                .unwrap_or_else(|e| panic!("canonical form {canonical:?} of {text:?}: {e}"));
            assert_eq!(reparsed, path, "canonical form {canonical:?} of {text:?}");
        }
        Err(Error::InvalidPath { position, .. }) => {
            assert!(position <= text.len(), "position past end for {text:?}");
        }
        Err(other) => panic!("unexpected error kind for {text:?}: {other}"),
    }
});
