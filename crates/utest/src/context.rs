// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Handle passed into each test body.

use utest_capture::{CaptureError, CapturedOutput};

use crate::diagnostics::{Reporter, Severity, SourceLocation};
use crate::registry::CaseState;

/// Access to the running case for assertions, warnings and output capture.
///
/// Lives for one invocation of a test body.
pub struct RunnerContext<'a> {
    name: &'a str,
    state: &'a mut CaseState,
    reporter: &'a mut Reporter,
}

impl<'a> RunnerContext<'a> {
    pub(crate) fn new(
        name: &'a str,
        state: &'a mut CaseState,
        reporter: &'a mut Reporter,
    ) -> Self {
        Self {
            name,
            state,
            reporter,
        }
    }

    /// Name of the running case
    pub fn name(&self) -> &str {
        self.name
    }

    /// Failed assertions recorded so far
    pub fn status(&self) -> u32 {
        self.state.status
    }

    /// Whether no assertion has failed yet
    pub fn passing(&self) -> bool {
        self.state.status == 0
    }

    /// Record a failed assertion and keep running the body
    pub fn record_failure(&mut self, location: SourceLocation, expression: &str) {
        self.state.status += 1;
        tracing::debug!(test = %self.name, %location, expression, "assertion failed");
        self.reporter.diagnostic(Severity::Failure, self.name, location, expression);
    }

    /// Record a failed assertion if `condition` is false; returns `condition`
    #[track_caller]
    pub fn check(&mut self, condition: bool, expression: &str) -> bool {
        if !condition {
            self.record_failure(SourceLocation::caller(), expression);
        }
        condition
    }

    /// Report a non-fatal warning; the case status is unchanged
    #[track_caller]
    pub fn warning(&mut self, message: &str) {
        self.warning_at(SourceLocation::caller(), message);
    }

    pub fn warning_at(&mut self, location: SourceLocation, message: &str) {
        self.reporter.diagnostic(Severity::Warning, self.name, location, message);
    }

    /// Report an unrecoverable harness error and abort the process.
    ///
    /// Reserved for internal failures such as losing the original stdout;
    /// assertions never end up here.
    #[track_caller]
    pub fn fatal(&mut self, message: &str) -> ! {
        self.fatal_at(SourceLocation::caller(), message)
    }

    fn fatal_at(&mut self, location: SourceLocation, message: &str) -> ! {
        self.reporter.diagnostic(Severity::Fatal, self.name, location, message);
        self.reporter.flush();
        tracing::error!(test = %self.name, reason = message, "fatal harness failure");
        std::process::abort()
    }

    /// Run `f` with stdout captured and keep the output on this case.
    ///
    /// Any output from an earlier capture in the same case is released first.
    /// On a resource error the failure is reported as a warning and an empty
    /// buffer is returned; a failure to restore stdout aborts the process.
    #[track_caller]
    pub fn record_output<F: FnOnce()>(&mut self, f: F) -> CapturedOutput {
        let location = SourceLocation::caller();
        self.state.captures_output = true;
        self.state.captured_output = None;

        match utest_capture::capture(f) {
            Ok(((), output)) => {
                self.state.captured_output = Some(output.clone());
                output
            }
            Err(e) => self.capture_failed(location, e),
        }
    }

    /// Output kept from the most recent capture in this case
    pub fn captured_output(&self) -> Option<&CapturedOutput> {
        self.state.captured_output.as_ref()
    }

    fn capture_failed(&mut self, location: SourceLocation, error: CaptureError) -> CapturedOutput {
        if error.is_fatal() {
            self.fatal_at(location, &error.to_string());
        }
        tracing::warn!(test = %self.name, error = %error, "stdout capture failed");
        self.warning_at(location, &format!("output capture failed: {error}"));
        CapturedOutput::default()
    }

    /// Compare captured output with the expected text; on mismatch record a
    /// failure and print a line diff
    pub fn check_output(
        &mut self,
        location: SourceLocation,
        actual: &CapturedOutput,
        expected: &str,
        expression: &str,
    ) -> bool {
        if actual.as_bytes() == expected.as_bytes() {
            return true;
        }
        self.record_failure(location, expression);
        let actual = actual.to_string_lossy();
        let diff = similar::TextDiff::from_lines(expected, actual.as_ref());
        self.reporter.detail(
            &diff
                .unified_diff()
                .header("expected", "captured")
                .to_string(),
        );
        false
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
