// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Convert a NEWS changelog file to HTML.
//!
//! This crate provides parsing and rendering functionality for transforming
//! a line-oriented NEWS changelog into a standalone HTML document.
//!
//! # Overview
//!
//! A NEWS file starts with a prefixed version line (`swish-1.2.3`) and
//! continues with blank-line-separated entries, each a heading followed by
//! `-`-marked item lines. This crate:
//!
//! 1. Extracts the version from the first line
//! 2. Parses the entries into typed Rust representations
//! 3. Renders the entries as an HTML document with headings and lists
//!
//! # Example
//!
//! ```no_run
//! use news2html::{parser, renderer};
//!
//! let news = std::fs::read_to_string("NEWS").unwrap();
//! let version = parser::extract_version(&news);
//! let entries = parser::parse_entries(&news).unwrap();
//!
//! let opts = renderer::RenderOptions::default();
//! let html = renderer::render_document(&entries, &opts);
//!
//! std::fs::write(format!("news-{version}.html"), html).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`parser`]: version extraction and entry parsing for NEWS files
//! - [`renderer`]: HTML generation for parsed entries
//!
//! Parsing happens entirely before any output is produced, so a malformed
//! NEWS file never results in a partially written document.

#![deny(missing_docs)]

pub mod parser;
pub mod renderer;
