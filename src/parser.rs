// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Line-oriented parsing for NEWS changelog files.
//!
//! This module handles the two read passes over a NEWS file: extracting the
//! version identifier from the first line, and parsing the rest of the file
//! into a sequence of changelog entries.
//!
//! # Format Overview
//!
//! A NEWS file contains:
//! - A first line of the form `swish-<version>`
//! - A sequence of entries, each a heading line followed by item lines,
//!   terminated by a blank line or end of input
//!
//! Within an entry body, a line starting with `-` begins a new item, and a
//! line starting with a space extends the previous item (the text after the
//! leading space is appended directly, with no separator). Any other
//! non-blank line is a format error. Only a zero-length line counts as
//! blank: a line of spaces still has a space as its first character and is
//! treated as a continuation.
//!
//! An entry with an empty heading marks the end of the stream and is
//! discarded rather than returned.
//!
//! # Example
//!
//! ```
//! use news2html::parser::{extract_version, parse_entries};
//!
//! let news = "swish-1.2.3\n\nChanges in 1.2.3:\n-fix crash on connect\n";
//!
//! assert_eq!(extract_version(news), "1.2.3");
//!
//! let entries = parse_entries(news).unwrap();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[1].heading, "Changes in 1.2.3:");
//! assert_eq!(entries[1].items, ["fix crash on connect"]);
//! ```

use snafu::prelude::*;
use std::str::Lines;

/// Literal prefix preceding the version on the first line of a NEWS file.
pub const VERSION_PREFIX: &str = "swish-";

/// Marker character that begins a new item line inside an entry body.
const ITEM_MARKER: char = '-';

/// Error type for NEWS parsing failures.
#[derive(Debug, Snafu)]
pub enum ParseError {
    /// An entry body line started with neither a space nor the item marker.
    #[snafu(display("unrecognized line in entry body: {line:?}"))]
    UnknownLineFormat {
        /// The offending line's content.
        line: String,
    },

    /// A continuation line appeared before any item existed in the entry.
    #[snafu(display("continuation line {line:?} before any item"))]
    ContinuationWithoutItem {
        /// The offending line's content.
        line: String,
    },
}

/// One changelog entry: a heading plus its ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The heading line, trimmed of trailing whitespace.
    pub heading: String,

    /// The entry's items in file order. Each item is the text after the
    /// marker character, with any continuation lines appended.
    pub items: Vec<String>,
}

/// Extracts the version identifier from the first line of a NEWS file.
///
/// The first line is trimmed of surrounding whitespace, then the
/// [`VERSION_PREFIX`] is stripped if present. A missing prefix is a no-op
/// rather than an error, and an empty input yields an empty string.
///
/// # Example
///
/// ```
/// use news2html::parser::extract_version;
///
/// assert_eq!(extract_version("swish-1.2.3\n"), "1.2.3");
/// assert_eq!(extract_version("1.2.3\n"), "1.2.3");
/// ```
#[must_use]
pub fn extract_version(input: &str) -> String {
    let first = input.lines().next().unwrap_or("").trim();
    first.strip_prefix(VERSION_PREFIX).unwrap_or(first).to_owned()
}

/// Parses all entries from a NEWS file's content.
///
/// Entries are read in order until one with an empty heading signals the
/// end of the stream. The version line is not special-cased: when the input
/// starts with one, it parses as a leading entry with no items.
///
/// # Errors
///
/// Returns an error if an entry body contains a line starting with neither
/// a space nor the item marker, or if a continuation line appears before
/// any item exists in its entry.
pub fn parse_entries(input: &str) -> Result<Vec<Entry>, ParseError> {
    let mut lines = input.lines();
    let mut entries = Vec::new();

    while let Some(entry) = read_entry(&mut lines)? {
        entries.push(entry);
    }

    Ok(entries)
}

/// Reads one entry from the line sequence.
///
/// Returns `Ok(None)` when the heading read comes back empty, which is the
/// sole end-of-stream condition. The item loop runs before that check, so a
/// malformed body still fails even under an empty heading.
fn read_entry(lines: &mut Lines<'_>) -> Result<Option<Entry>, ParseError> {
    let heading = lines.next().unwrap_or("").trim_end();
    let mut items: Vec<String> = Vec::new();

    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some(rest) = line.strip_prefix(' ') {
            let last = items
                .last_mut()
                .context(ContinuationWithoutItemSnafu { line })?;
            last.push_str(rest);
        } else if let Some(rest) = line.strip_prefix(ITEM_MARKER) {
            items.push(rest.to_owned());
        } else {
            return UnknownLineFormatSnafu { line }.fail();
        }
    }

    if heading.is_empty() {
        return Ok(None);
    }

    Ok(Some(Entry {
        heading: heading.to_owned(),
        items,
    }))
}
