// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::test_support::{buffered_reporter, CAPTURE_LOCK};

#[test]
fn test_record_failure_increments_status() {
    let (mut reporter, _out, diag) = buffered_reporter();
    let mut state = CaseState::default();
    {
        let mut ctx = RunnerContext::new("counting", &mut state, &mut reporter);
        assert!(ctx.passing());
        ctx.record_failure(SourceLocation::new("x.rs", 1), "1 == 2");
        ctx.record_failure(SourceLocation::new("x.rs", 2), "3 == 4");
        assert_eq!(ctx.status(), 2);
        assert!(!ctx.passing());
        assert_eq!(ctx.name(), "counting");
    }
    assert_eq!(state.status, 2);
    let text = diag.contents();
    assert!(text.contains("Assertion Failure: TEST(counting) x.rs:1 '1 == 2'"));
    assert!(text.contains("Assertion Failure: TEST(counting) x.rs:2 '3 == 4'"));
}

#[test]
fn test_check_reports_caller_location() {
    let (mut reporter, _out, diag) = buffered_reporter();
    let mut state = CaseState::default();
    let mut ctx = RunnerContext::new("located", &mut state, &mut reporter);

    assert!(ctx.check(true, "fine"));
    assert!(!ctx.check(false, "broken"));
    assert_eq!(ctx.status(), 1);
    let text = diag.contents();
    assert!(text.contains("context_tests.rs:"), "{}", text);
    assert!(text.ends_with("'broken'\n"));
}

#[test]
fn test_warning_leaves_status_alone() {
    let (mut reporter, _out, diag) = buffered_reporter();
    let mut state = CaseState::default();
    let mut ctx = RunnerContext::new("warned", &mut state, &mut reporter);

    ctx.warning("heads up");
    assert_eq!(ctx.status(), 0);
    assert!(diag.contents().starts_with("Assertion Warning: TEST(warned) "));
    assert!(diag.contents().contains("'heads up'"));
}

#[test]
fn test_check_output_match() {
    let (mut reporter, _out, diag) = buffered_reporter();
    let mut state = CaseState::default();
    let mut ctx = RunnerContext::new("output", &mut state, &mut reporter);

    let captured = CapturedOutput::new(b"hello\n".to_vec());
    assert!(ctx.check_output(
        SourceLocation::new("o.rs", 5),
        &captured,
        "hello\n",
        "buf == \"hello\""
    ));
    assert_eq!(ctx.status(), 0);
    assert!(diag.contents().is_empty());
}

#[test]
fn test_check_output_mismatch_prints_diff() {
    let (mut reporter, _out, diag) = buffered_reporter();
    let mut state = CaseState::default();
    let mut ctx = RunnerContext::new("output", &mut state, &mut reporter);

    let captured = CapturedOutput::new(b"a\nB\nc\n".to_vec());
    assert!(!ctx.check_output(
        SourceLocation::new("o.rs", 9),
        &captured,
        "a\nb\nc\n",
        "buf == expected"
    ));
    assert_eq!(ctx.status(), 1);
    let text = diag.contents();
    assert!(text.contains("Assertion Failure: TEST(output) o.rs:9 'buf == expected'"));
    assert!(text.contains("--- expected"));
    assert!(text.contains("+++ captured"));
    assert!(text.contains("-b\n"));
    assert!(text.contains("+B\n"));
}

#[test]
fn test_no_captured_output_before_capture() {
    let (mut reporter, _out, _diag) = buffered_reporter();
    let mut state = CaseState::default();
    let ctx = RunnerContext::new("fresh", &mut state, &mut reporter);
    assert!(ctx.captured_output().is_none());
}

#[test]
fn test_capture_resource_error_degrades_to_warning() {
    let _serial = CAPTURE_LOCK.lock();
    let (mut reporter, _out, diag) = buffered_reporter();
    let mut state = CaseState::default();

    utest_capture::begin().unwrap();
    let output = {
        let mut ctx = RunnerContext::new("degraded", &mut state, &mut reporter);
        let output = ctx.record_output(|| {});
        assert_eq!(ctx.status(), 0);
        output
    };
    let _ = utest_capture::end().unwrap();

    assert!(output.is_empty());
    assert_eq!(state.status, 0);
    let text = diag.contents();
    assert!(text.starts_with("Assertion Warning: TEST(degraded) "), "{}", text);
    assert!(
        text.contains("'output capture failed: capture session already active'"),
        "{}",
        text
    );
}
