// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! HTML rendering for parsed NEWS entries.
//!
//! This module transforms a sequence of [`Entry`] values into a standalone
//! HTML document. Each entry becomes an `<h1>` heading followed by a `<ul>`
//! list, and the blocks are wrapped in a fixed `<html>`/`<body>` shell with
//! inline styling.
//!
//! Content is emitted verbatim: the NEWS file is trusted build input, and no
//! HTML escaping is applied to headings or items.
//!
//! # Example
//!
//! ```
//! use news2html::parser::Entry;
//! use news2html::renderer::{RenderOptions, render_document};
//!
//! let entries = vec![Entry {
//!     heading: "Changes in 1.2.3:".into(),
//!     items: vec!["fix crash on connect".into()],
//! }];
//!
//! let html = render_document(&entries, &RenderOptions::default());
//!
//! assert!(html.contains("<h1"));
//! assert!(html.contains("\t<li>fix crash on connect</li>"));
//! ```

use crate::parser::Entry;

/// Inline style applied to every entry heading.
const HEADING_STYLE: &str = "font-family: sans-serif; font-size: 14pt";

/// Inline style applied to the document body.
const BODY_STYLE: &str = "font-family: sans-serif; font-size: 10pt";

/// Configuration options for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Base tab indent level for list items.
    ///
    /// Each `<li>` line is prefixed with one more tab than this level, so
    /// the default of 0 indents items by a single tab.
    pub indent: usize,
}

/// Renders one entry as an `<h1>` heading followed by its `<ul>` list.
///
/// Lines within the block are joined with single newlines; an entry with no
/// items produces `<ul>` immediately followed by `</ul>`.
fn render_entry(entry: &Entry, indent: usize) -> String {
    let tabs = "\t".repeat(indent + 1);
    let mut lines = Vec::with_capacity(entry.items.len() + 3);

    lines.push(format!(
        "<h1 style=\"{HEADING_STYLE}\">{}</h1>",
        entry.heading
    ));
    lines.push("<ul>".to_owned());
    for item in &entry.items {
        lines.push(format!("{tabs}<li>{item}</li>"));
    }
    lines.push("</ul>".to_owned());

    lines.join("\n")
}

/// Renders parsed entries as a complete HTML document.
///
/// This is the main entry point for rendering. Per-entry blocks are joined
/// with single newlines and wrapped in a fixed `<html>`/`<body>` shell.
///
/// # Arguments
///
/// * `entries` - The parsed entries in file order
/// * `opts` - Configuration options controlling the output format
#[must_use]
pub fn render_document(entries: &[Entry], opts: &RenderOptions) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| render_entry(entry, opts.indent))
        .collect();

    format!(
        "<html>\n<body style=\"{BODY_STYLE}\">\n{}\n</body>\n</html>\n",
        blocks.join("\n")
    )
}
