// SPDX-License-Identifier: MIT OR Apache-2.0
//! # dynjson-cli
//!
//! Command-line interface for dynjson - query decoded JSON by path.
//!
//! ## Usage
//!
//! ```bash
//! # Print a node as JSON
//! dynjson get 'users[0].name' data.json
//!
//! # Print a string without quotes, falling back when missing
//! dynjson get -r --default unknown 'users[9].name' data.json
//!
//! # Print the type of a node (absent for missing paths)
//! dynjson type users data.json
//!
//! # List the keys of an object, sorted
//! cat data.json | dynjson keys 'users[0]'
//! ```
//!
//! ## Subcommands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `get` | Print the node at a path |
//! | `type` | Print the node's type |
//! | `keys` | Print an object's keys in sorted order |
//!
//! The command implementations live here so they can be exercised without
//! spawning the binary.

#![warn(missing_docs)]

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use dynjson::{Document, ParsedPath};
use tracing::debug;

/// Re-export of dynjson for library users of this crate.
pub use dynjson as core;

/// Output options for `get`.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Print string payloads without JSON quoting
    pub raw: bool,
    /// Indent JSON output
    pub pretty: bool,
    /// Printed instead of failing when the node is absent or null
    pub default: Option<String>,
}

/// Read and decode a document from `input`, or stdin when `None`.
///
/// # Errors
///
/// Fails when the input cannot be read or is not valid JSON.
pub fn read_document(input: Option<&Path>) -> Result<Document> {
    let bytes = if let Some(path) = input {
        fs::read(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("reading stdin")?;
        buffer
    };
    debug!(bytes = bytes.len(), "decoding input");
    Document::from_slice(&bytes).context("decoding input")
}

/// Parse a path argument.
///
/// # Errors
///
/// Fails with the parser's position and reason for malformed paths.
pub fn parse_path(text: &str) -> Result<ParsedPath> {
    let path = ParsedPath::parse(text).with_context(|| format!("invalid path {text:?}"))?;
    debug!(%path, segments = path.len(), "parsed path");
    Ok(path)
}

/// Render the node at `path`.
///
/// # Errors
///
/// Fails when nothing is at `path` and no default was given.
pub fn run_get(doc: &Document, path: &ParsedPath, options: &GetOptions) -> Result<String> {
    let node = doc.at(path);

    if node.is_null()
        && let Some(default) = &options.default
    {
        return Ok(default.clone());
    }

    if node.is_absent() {
        let err = doc
            .at_or_error(path)
            .err()
            .map_or_else(|| "no such key".to_string(), |e| e.to_string());
        bail!("no value at {path}: {err}");
    }

    if options.raw
        && let Ok(text) = node.string_or_error()
    {
        return Ok(text.to_string());
    }

    Ok(if options.pretty {
        format!("{node:#}")
    } else {
        node.to_string()
    })
}

/// Name the type of the node at `path`; `absent` when there is none.
#[must_use]
pub fn run_type(doc: &Document, path: &ParsedPath) -> String {
    let node = doc.at(path);
    if node.is_absent() {
        "absent".to_string()
    } else {
        node.value_type().to_string()
    }
}

/// The sorted keys of the object at `path`, one per line.
///
/// # Errors
///
/// Fails when the node is absent or not an object.
pub fn run_keys(doc: &Document, path: &ParsedPath) -> Result<String> {
    let keys = doc
        .at(path)
        .keys_sorted_or_error()
        .with_context(|| format!("cannot list keys at {path}"))?;
    Ok(keys.join("\n"))
}
