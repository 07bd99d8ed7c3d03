// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console report and diagnostic formatting.
//!
//! The report stream (normally stdout) carries ignored-case lines, progress
//! markers and the summary. The diagnostic stream (normally stderr) carries
//! assertion failures, warnings and fatal errors, formatted as
//! `<label>: TEST(<name>) <location> '<text>'`.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use crate::config::ColorMode;

const COL_OK: &str = "\x1b[1;32m";
const COL_WARNING: &str = "\x1b[1;35m";
const COL_ERROR: &str = "\x1b[1;31m";
const COL_RESET: &str = "\x1b[0m";

/// Progress marker for a passed case
pub const PASS_MARKER: char = '.';
/// Progress marker for a failed case
pub const FAIL_MARKER: char = 'F';

/// Source position of an assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of a `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Severity of a diagnostic line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Failure,
    Warning,
    Fatal,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Failure => "Assertion Failure",
            Severity::Warning => "Assertion Warning",
            Severity::Fatal => "Fatal Failure",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Failure | Severity::Fatal => COL_ERROR,
            Severity::Warning => COL_WARNING,
        }
    }
}

type Sink = Box<dyn Write + Send>;

/// Writes the run report and diagnostics.
///
/// Write errors are ignored: a broken console must not change test results.
pub struct Reporter {
    out: Sink,
    diag: Sink,
    color_out: bool,
    color_diag: bool,
}

impl Reporter {
    /// Report on stdout, diagnostics on stderr
    pub fn stdio(color: ColorMode) -> Self {
        Self {
            out: Box::new(io::stdout()),
            diag: Box::new(io::stderr()),
            color_out: color.enabled_for(io::stdout().is_terminal()),
            color_diag: color.enabled_for(io::stderr().is_terminal()),
        }
    }

    /// Report and diagnostics both on stderr
    pub fn stderr_only(color: ColorMode) -> Self {
        let color = color.enabled_for(io::stderr().is_terminal());
        Self {
            out: Box::new(io::stderr()),
            diag: Box::new(io::stderr()),
            color_out: color,
            color_diag: color,
        }
    }

    /// Report to arbitrary writers
    pub fn new(
        out: impl Write + Send + 'static,
        diag: impl Write + Send + 'static,
        color: bool,
    ) -> Self {
        Self {
            out: Box::new(out),
            diag: Box::new(diag),
            color_out: color,
            color_diag: color,
        }
    }

    /// Announce a case skipped because it is marked ignored
    pub fn ignored(&mut self, name: &str) {
        let _ = writeln!(self.out, "Ignoring testcase: '{}'", name);
    }

    /// Progress marker after one executed case
    pub fn progress(&mut self, passed: bool) {
        let _ = match (passed, self.color_out) {
            (true, _) => write!(self.out, "{}", PASS_MARKER),
            (false, true) => write!(self.out, "{COL_ERROR}{FAIL_MARKER}{COL_RESET}"),
            (false, false) => write!(self.out, "{}", FAIL_MARKER),
        };
        let _ = self.out.flush();
    }

    /// Final `<passed> of <total> tests passed` line
    pub fn summary(&mut self, passed: usize, total: usize) {
        let (color, label) = if passed == total {
            (COL_OK, "Ok")
        } else {
            (COL_ERROR, "Fail")
        };
        let _ = if self.color_out {
            writeln!(
                self.out,
                "\n{color}{label}{COL_RESET}: {passed} of {total} tests passed"
            )
        } else {
            writeln!(self.out, "\n{label}: {passed} of {total} tests passed")
        };
        let _ = self.out.flush();
    }

    /// Diagnostic line for one test case
    pub fn diagnostic(
        &mut self,
        severity: Severity,
        test: &str,
        location: SourceLocation,
        text: &str,
    ) {
        let _ = if self.color_diag {
            writeln!(
                self.diag,
                "{}{}:{} TEST({}) {} '{}'",
                severity.color(),
                severity.label(),
                COL_RESET,
                test,
                location,
                text
            )
        } else {
            writeln!(
                self.diag,
                "{}: TEST({}) {} '{}'",
                severity.label(),
                test,
                location,
                text
            )
        };
        let _ = self.diag.flush();
    }

    /// Free-form detail following a diagnostic line, such as a diff
    pub fn detail(&mut self, text: &str) {
        let _ = write!(self.diag, "{}", text);
        if !text.ends_with('\n') {
            let _ = writeln!(self.diag);
        }
        let _ = self.diag.flush();
    }

    /// Flush both streams
    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.diag.flush();
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
