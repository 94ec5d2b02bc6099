// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Integration tests for news2html parsing, rendering, and the binary.

use news2html::{parser, renderer};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const SAMPLE_NEWS: &str = "\
swish-1.2.3

Changes in 1.2.3:
-fix crash on connect
-add keepalive option

Changes in 1.2.2:
-initial release
";

fn write_news(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("NEWS");
    fs::write(&path, content).expect("failed to write NEWS fixture");
    path
}

fn run_binary(dir: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_news2html"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("failed to run news2html")
}

/// Full library pipeline over real files: read, extract, parse, render, write.
#[test]
fn converts_news_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let news_path = write_news(&dir, SAMPLE_NEWS);

    let news = fs::read_to_string(&news_path).unwrap();

    let version = parser::extract_version(&news);
    assert_eq!(version, "1.2.3");

    let entries = parser::parse_entries(&news).unwrap();
    // The version line parses as a leading entry ahead of the two sections.
    assert_eq!(entries.len(), 3);

    let html = renderer::render_document(&entries, &renderer::RenderOptions::default());
    let out_path = dir.path().join(format!("news-{version}.html"));
    fs::write(&out_path, &html).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("<html>"));
    assert_eq!(written.matches("<h1").count(), 3);
    assert!(written.contains("<li>fix crash on connect</li>"));
    assert!(written.contains("<li>initial release</li>"));
}

/// A continuation line's text lands inside the rendered list item.
#[test]
fn continuation_lines_flow_through_to_rendered_items() {
    let news = "swish-2.0\n\nChanges:\n-improved reconnect \n behavior\n";

    let entries = parser::parse_entries(news).unwrap();
    let html = renderer::render_document(&entries, &renderer::RenderOptions::default());

    assert!(html.contains("<li>improved reconnect behavior</li>"));
}

#[test]
fn binary_writes_version_named_output() {
    let dir = TempDir::new().unwrap();
    write_news(&dir, SAMPLE_NEWS);

    let output = run_binary(&dir, &[]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out_path = dir.path().join("news-1.2.3.html");
    assert!(out_path.exists(), "expected news-1.2.3.html to be written");

    let html = fs::read_to_string(out_path).unwrap();
    assert!(html.contains("Changes in 1.2.3:"));
    assert!(html.contains("Changes in 1.2.2:"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Wrote news-1.2.3.html"));
}

/// A format error aborts the run before any output file is created.
#[test]
fn binary_aborts_without_output_on_format_error() {
    let dir = TempDir::new().unwrap();
    write_news(&dir, "swish-0.9\n\nChanges:\n*not an item\n");

    let output = run_binary(&dir, &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("*not an item"), "stderr: {stderr}");

    let html_files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .collect();
    assert!(
        html_files.is_empty(),
        "no output should exist after a parse failure"
    );
}

#[test]
fn quiet_flag_suppresses_completion_message() {
    let dir = TempDir::new().unwrap();
    write_news(&dir, SAMPLE_NEWS);

    let output = run_binary(&dir, &["--quiet"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(dir.path().join("news-1.2.3.html").exists());
}

#[test]
fn verbose_flag_reports_each_entry() {
    let dir = TempDir::new().unwrap();
    write_news(&dir, SAMPLE_NEWS);

    let output = run_binary(&dir, &["--verbose"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parsed swish-1.2.3 (0 items)"));
    assert!(stderr.contains("Parsed Changes in 1.2.3: (2 items)"));
    assert!(stderr.contains("Parsed Changes in 1.2.2: (1 items)"));
}

#[test]
fn rejects_unexpected_arguments() {
    let dir = TempDir::new().unwrap();
    write_news(&dir, SAMPLE_NEWS);

    let output = run_binary(&dir, &["--output", "elsewhere"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("news-1.2.3.html").exists());
}
