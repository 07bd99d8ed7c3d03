// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

fn noop(_: &mut RunnerContext<'_>) {}

#[test]
fn test_registration_order_is_preserved() {
    let mut registry = Registry::new();
    registry.register("b", noop, TestOptions::new());
    registry.register("a", noop, TestOptions::new());
    registry.register("c", noop, TestOptions::new().ignore(true));

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.names(), vec!["b", "a", "c"]);
    assert!(registry.cases()[2].is_ignored());
}

#[test]
fn test_new_case_starts_passing() {
    let case = TestCase::new("fresh", noop, TestOptions::new());
    assert_eq!(case.name(), "fresh");
    assert_eq!(case.status(), 0);
    assert!(case.passed());
    assert!(!case.is_ignored());
    assert!(case.state.captured_output.is_none());
    assert!(!case.state.captures_output);
}

#[test]
fn test_options_builder() {
    let options = TestOptions::new()
        .ignore(true)
        .setup(|| {})
        .teardown(|| {});
    let case = TestCase::new("hooked", noop, options);
    assert!(case.is_ignored());
    assert!(case.setup.is_some());
    assert!(case.teardown.is_some());
    let debug = format!("{:?}", case);
    assert!(debug.contains("has_setup: true"));
}

// The only unit test touching the process-wide registry.
#[test]
fn test_global_registry_lifecycle() {
    register("global_one", noop, TestOptions::new());
    assert!(registered_names().contains(&"global_one".to_string()));

    let (taken, guard) = take_global();
    assert!(taken.names().contains(&"global_one"));
    assert!(registered_names().is_empty());

    register("during_run", noop, TestOptions::new());
    assert!(registered_names().is_empty());

    drop(guard);
    register("after_run", noop, TestOptions::new());
    assert_eq!(registered_names(), vec!["after_run".to_string()]);
    drop(take_global());
}
