#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for navigation correctness.
//!
//! Decodes arbitrary input, walks every path that exists in the document plus
//! a few that do not, and checks `Value::at` against a plain serde_json walk.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_navigation

use dynjson::{Document, PathSegment, Value};
use libfuzzer_sys::fuzz_target;
use serde_json::Value as JsonValue;

/// Reference walk using serde_json indexing
fn extract_from_serde<'a>(value: &'a JsonValue, path: &[PathSegment]) -> Option<&'a JsonValue> {
    let mut current = value;
    for segment in path {
        current = match segment {
            PathSegment::Field(name) => current.get(name.as_str())?,
            PathSegment::Index(index) => current.get(*index)?,
        };
    }
    Some(current)
}

/// Collect every path present in the document
fn generate_paths(value: &JsonValue, prefix: &[PathSegment], paths: &mut Vec<Vec<PathSegment>>) {
    let children: Vec<(PathSegment, &JsonValue)> = match value {
        JsonValue::Object(obj) => obj
            .iter()
            .map(|(key, val)| (PathSegment::Field(key.clone()), val))
            .collect(),
        JsonValue::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, val)| (PathSegment::Index(i), val))
            .collect(),
        _ => return,
    };

    for (segment, child) in children {
        let mut path = prefix.to_vec();
        path.push(segment);
        paths.push(path.clone());
        generate_paths(child, &path, paths);
    }
}

fn verify_path(doc: &Document, path: &[PathSegment]) {
    let root = doc.root();
    let expected = extract_from_serde(doc.as_json(), path);

    let found = root.at(path);
    assert_eq!(found.as_json(), expected, "at() mismatch for {path:?}");
    assert_eq!(
        root.at_or_error(path).is_ok(),
        expected.is_some(),
        "at_or_error() mismatch for {path:?}"
    );

    // Step-by-step navigation must agree with the single call
    let chained = path
        .iter()
        .fold(root, |node: Value<'_>, segment| node.get(segment));
    assert_eq!(chained, found, "chaining mismatch for {path:?}");

    // Accessors never panic in the fallible tiers
    let _ = found.string_or_error();
    let _ = found.number_or_default(0);
    let _ = found.int_or_default(0);
    let _ = found.float_or_default(0.0);
    let _ = found.bool_or_default(false);
    let _ = found.map_or_error();
    let _ = found.list_or_error();
    let _ = found.keys_sorted_or_error();
}

fuzz_target!(|data: &[u8]| {
    // Skip very large inputs
    if data.len() > 50_000 {
        return;
    }

    let doc = match Document::from_slice(data) {
        Ok(doc) => doc,
        Err(_) => return, // Not valid JSON
    };

    let mut paths = vec![Vec::new()];
    generate_paths(doc.as_json(), &[], &mut paths);

    for path in &paths {
        verify_path(&doc, path);

        // Extend every real path with steps that cannot exist
        let mut missing = path.clone();
        missing.push(PathSegment::Field("\u{0}missing".to_string()));
        missing.push(PathSegment::Index(usize::MAX));
        verify_path(&doc, &missing);
    }
});
