// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case registry.
//!
//! Cases are kept in registration order. The process-wide registry is filled
//! by [`register`] before [`crate::run_all`] takes it out and runs it.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{const_mutex, Mutex};
use utest_capture::CapturedOutput;

use crate::context::RunnerContext;

/// Test body
pub type TestBody = Box<dyn FnMut(&mut RunnerContext<'_>) + Send>;
/// Setup or teardown hook
pub type Hook = Box<dyn FnMut() + Send>;

static GLOBAL: Mutex<Registry> = const_mutex(Registry::new());
static RUNNING: AtomicBool = AtomicBool::new(false);

/// Per-case options: ignore flag and lifecycle hooks
#[derive(Default)]
pub struct TestOptions {
    ignored: bool,
    setup: Option<Hook>,
    teardown: Option<Hook>,
}

impl TestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the case; it is still listed before the run
    pub fn ignore(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    /// Run `hook` before the body
    pub fn setup(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.setup = Some(Box::new(hook));
        self
    }

    /// Run `hook` after the body
    pub fn teardown(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.teardown = Some(Box::new(hook));
        self
    }
}

/// Mutable state of a case, touched only while its body runs
#[derive(Debug, Default)]
pub struct CaseState {
    /// Failed assertions recorded by the body; 0 means passed
    pub status: u32,
    /// Set once the body opens a capture session
    pub captures_output: bool,
    /// Output of the most recent capture, released when the case finishes
    pub captured_output: Option<CapturedOutput>,
}

/// One registered test
pub struct TestCase {
    pub(crate) name: String,
    pub(crate) body: TestBody,
    pub(crate) setup: Option<Hook>,
    pub(crate) teardown: Option<Hook>,
    pub(crate) ignored: bool,
    pub(crate) state: CaseState,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, body: F, options: TestOptions) -> Self
    where
        F: FnMut(&mut RunnerContext<'_>) + Send + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
            setup: options.setup,
            teardown: options.teardown,
            ignored: options.ignored,
            state: CaseState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Failed assertions recorded so far
    pub fn status(&self) -> u32 {
        self.state.status
    }

    pub fn passed(&self) -> bool {
        self.state.status == 0
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("ignored", &self.ignored)
            .field("has_setup", &self.setup.is_some())
            .field("has_teardown", &self.teardown.is_some())
            .field("state", &self.state)
            .finish()
    }
}

/// Ordered collection of test cases
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    pub const fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a case built from `name`, `body` and `options`
    pub fn register<F>(&mut self, name: impl Into<String>, body: F, options: TestOptions)
    where
        F: FnMut(&mut RunnerContext<'_>) + Send + 'static,
    {
        self.push(TestCase::new(name, body, options));
    }

    /// Append a prepared case
    pub fn push(&mut self, case: TestCase) {
        tracing::debug!(test = %case.name, ignored = case.ignored, "registered test case");
        self.cases.push(case);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases
    }
}

/// Append a case to the process-wide registry.
///
/// Registration while [`crate::run_all`] is executing is rejected: the case
/// is dropped with a warning.
pub fn register<F>(name: impl Into<String>, body: F, options: TestOptions)
where
    F: FnMut(&mut RunnerContext<'_>) + Send + 'static,
{
    let case = TestCase::new(name, body, options);
    if RUNNING.load(Ordering::SeqCst) {
        tracing::warn!(test = %case.name, "registration during a run ignored");
        return;
    }
    GLOBAL.lock().push(case);
}

/// Names in the process-wide registry, in registration order
pub fn registered_names() -> Vec<String> {
    GLOBAL.lock().names().into_iter().map(String::from).collect()
}

/// Take the process-wide registry, leaving it empty, and mark a run active.
///
/// The returned guard clears the mark when dropped.
pub(crate) fn take_global() -> (Registry, RunGuard) {
    RUNNING.store(true, Ordering::SeqCst);
    let registry = std::mem::take(&mut *GLOBAL.lock());
    (registry, RunGuard)
}

pub(crate) struct RunGuard;

impl Drop for RunGuard {
    fn drop(&mut self) {
        RUNNING.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
