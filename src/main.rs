// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Command-line interface for news2html.
//!
//! This binary provides the `news2html` command for converting the `NEWS`
//! changelog in the current directory to a version-named HTML file. It takes
//! no configuration: the input path, output pattern, and formatting are
//! fixed, and the only accepted flags control diagnostics.

use lexopt::prelude::*;
use news2html::{parser, renderer};
use snafu::prelude::*;
use std::path::{Path, PathBuf};

/// Fixed relative path of the changelog source file.
const NEWS_PATH: &str = "NEWS";

struct Cli {
    quiet: bool,
    verbose: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to parse arguments: {source}"))]
    ParseArgs { source: lexopt::Error },

    #[snafu(display("failed to read {}: {source}", path.display()))]
    ReadNews {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to parse {}: {source}", path.display()))]
    ParseNews {
        path: PathBuf,
        source: parser::ParseError,
    },

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteHtml {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn print_help() {
    println!(
        "\
{name} {version}
Convert a NEWS changelog file to HTML

Usage: {name} [OPTIONS]

Reads `{news}` from the current directory and writes `news-<version>.html`,
where <version> comes from the first line of the news file.

Options:
  -v, --verbose  Print a summary of each parsed entry
  -q, --quiet    Suppress the completion message
  -h, --help     Print help
  -V, --version  Print version",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        news = NEWS_PATH,
    );
}

fn parse_args() -> Result<Cli, lexopt::Error> {
    let mut quiet = false;
    let mut verbose = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('v') | Long("verbose") => verbose = true,
            Short('q') | Long("quiet") => quiet = true,
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(Cli { quiet, verbose })
}

fn main() -> Result<(), Error> {
    let cli = parse_args().context(ParseArgsSnafu)?;
    let news = Path::new(NEWS_PATH);

    let version = read_version(news)?;
    let entries = read_entries(news)?;

    if cli.verbose {
        for entry in &entries {
            eprintln!("Parsed {} ({} items)", entry.heading, entry.items.len());
        }
    }

    let opts = renderer::RenderOptions::default();
    let html = renderer::render_document(&entries, &opts);

    let out_path = output_path(&version);
    std::fs::write(&out_path, &html).context(WriteHtmlSnafu { path: &out_path })?;

    if !cli.quiet {
        eprintln!("Wrote {}", out_path.display());
    }
    Ok(())
}

/// First read pass over the news file: only the version line matters.
fn read_version(path: &Path) -> Result<String, Error> {
    let news = std::fs::read_to_string(path).context(ReadNewsSnafu { path })?;
    Ok(parser::extract_version(&news))
}

/// Second read pass over the news file: parse all entries.
///
/// A parse failure propagates from here, before any output file exists.
fn read_entries(path: &Path) -> Result<Vec<parser::Entry>, Error> {
    let news = std::fs::read_to_string(path).context(ReadNewsSnafu { path })?;
    parser::parse_entries(&news).context(ParseNewsSnafu { path })
}

/// Output filename derived from the extracted version.
fn output_path(version: &str) -> PathBuf {
    PathBuf::from(format!("news-{version}.html"))
}
