// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::test_support::{buffered_reporter, SharedBuffer};

#[test]
fn test_failure_line_format() {
    let (mut reporter, out, diag) = buffered_reporter();
    reporter.diagnostic(
        Severity::Failure,
        "factorial",
        SourceLocation::new("src/main.rs", 42),
        "fac(3) == 6",
    );
    assert_eq!(
        diag.contents(),
        "Assertion Failure: TEST(factorial) src/main.rs:42 'fac(3) == 6'\n"
    );
    assert!(out.contents().is_empty());
}

#[test]
fn test_warning_and_fatal_labels() {
    let (mut reporter, _out, diag) = buffered_reporter();
    let here = SourceLocation::new("a.rs", 1);
    reporter.diagnostic(Severity::Warning, "t", here, "slow");
    reporter.diagnostic(Severity::Fatal, "t", here, "broken");
    let text = diag.contents();
    assert!(text.contains("Assertion Warning: TEST(t) a.rs:1 'slow'"));
    assert!(text.contains("Fatal Failure: TEST(t) a.rs:1 'broken'"));
}

#[test]
fn test_colored_failure_line() {
    let diag = SharedBuffer::new();
    let mut reporter = Reporter::new(SharedBuffer::new(), diag.clone(), true);
    reporter.diagnostic(Severity::Failure, "t", SourceLocation::new("a.rs", 3), "x");
    assert_eq!(
        diag.contents(),
        "\x1b[1;31mAssertion Failure:\x1b[0m TEST(t) a.rs:3 'x'\n"
    );
}

#[test]
fn test_ignored_line() {
    let (mut reporter, out, _diag) = buffered_reporter();
    reporter.ignored("skipped_case");
    assert_eq!(out.contents(), "Ignoring testcase: 'skipped_case'\n");
}

#[test]
fn test_progress_markers() {
    let (mut reporter, out, _diag) = buffered_reporter();
    reporter.progress(true);
    reporter.progress(false);
    reporter.progress(true);
    assert_eq!(out.contents(), ".F.");
}

#[test]
fn test_summary_all_passed() {
    let (mut reporter, out, _diag) = buffered_reporter();
    reporter.summary(4, 4);
    assert_eq!(out.contents(), "\nOk: 4 of 4 tests passed\n");
}

#[test]
fn test_summary_with_failures() {
    let (mut reporter, out, _diag) = buffered_reporter();
    reporter.summary(3, 4);
    assert_eq!(out.contents(), "\nFail: 3 of 4 tests passed\n");
}

#[test]
fn test_colored_summary() {
    let out = SharedBuffer::new();
    let mut reporter = Reporter::new(out.clone(), SharedBuffer::new(), true);
    reporter.summary(2, 2);
    assert_eq!(out.contents(), "\n\x1b[1;32mOk\x1b[0m: 2 of 2 tests passed\n");
}

#[test]
fn test_detail_terminates_line() {
    let (mut reporter, _out, diag) = buffered_reporter();
    reporter.detail("-a\n+b");
    assert_eq!(diag.contents(), "-a\n+b\n");
}

#[test]
fn test_caller_location_points_here() {
    let location = SourceLocation::caller();
    assert!(location.file.ends_with("diagnostics_tests.rs"));
    assert_eq!(location.to_string(), format!("{}:{}", location.file, location.line));
}
