// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test execution.
//!
//! Every selected, non-ignored case runs in registration order through
//! setup, body, teardown and capture cleanup. Assertion failures inside a
//! body are counted on the case and never stop the body or the run.

use serde::{Deserialize, Serialize};

use crate::config::{HarnessConfig, ReportFormat};
use crate::context::RunnerContext;
use crate::diagnostics::Reporter;
use crate::registry::{self, Registry, TestCase};

/// Outcome of one executed case
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaseResult {
    pub name: String,
    /// Failed assertions recorded by the body
    pub failures: u32,
    pub passed: bool,
}

/// Outcome of a whole run
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunReport {
    /// Executed cases; ignored and filtered-out cases are not counted
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Names of cases skipped because they are marked ignored
    pub ignored: Vec<String>,
    /// Executed cases in run order
    pub results: Vec<CaseResult>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Number of failed cases, used as the process exit status
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.failed).unwrap_or(i32::MAX)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs a [`Registry`] and reports through a [`Reporter`]
pub struct Runner {
    reporter: Reporter,
    filter: Option<String>,
}

impl Runner {
    pub fn new(reporter: Reporter) -> Self {
        Self {
            reporter,
            filter: None,
        }
    }

    /// Runner on stdio, configured by `config`
    pub fn from_config(config: &HarnessConfig) -> Self {
        let reporter = match config.format {
            ReportFormat::Text => Reporter::stdio(config.color),
            ReportFormat::Json => Reporter::stderr_only(config.color),
        };
        Self::new(reporter).with_filter(config.filter.clone())
    }

    /// Only run cases whose name contains `filter`
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    fn selects(&self, case: &TestCase) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |pattern| case.name.contains(pattern))
    }

    /// Run every selected case in registration order
    pub fn run(&mut self, registry: &mut Registry) -> RunReport {
        let mut report = RunReport::default();

        let mut runnable = Vec::new();
        for (index, case) in registry.cases().iter().enumerate() {
            if !self.selects(case) {
                continue;
            }
            if case.ignored {
                self.reporter.ignored(&case.name);
                report.ignored.push(case.name.clone());
            } else {
                runnable.push(index);
            }
        }

        let cases = registry.cases_mut();
        for index in runnable {
            let case = &mut cases[index];
            let passed = self.run_case(case);
            self.reporter.progress(passed);

            report.total += 1;
            if passed {
                report.passed += 1;
            } else {
                report.failed += 1;
            }
            report.results.push(CaseResult {
                name: case.name.clone(),
                failures: case.state.status,
                passed,
            });
        }

        self.reporter.summary(report.passed, report.total);
        tracing::debug!(
            total = report.total,
            failed = report.failed,
            ignored = report.ignored.len(),
            "test run finished"
        );
        report
    }

    fn run_case(&mut self, case: &mut TestCase) -> bool {
        tracing::debug!(test = %case.name, "running test case");

        if let Some(setup) = case.setup.as_mut() {
            setup();
        }

        {
            let TestCase {
                name, body, state, ..
            } = case;
            let mut ctx = RunnerContext::new(name, state, &mut self.reporter);
            body(&mut ctx);
        }

        if let Some(teardown) = case.teardown.as_mut() {
            teardown();
        }

        if case.state.captures_output {
            case.state.captured_output = None;
            case.state.captures_output = false;
        }

        tracing::debug!(test = %case.name, failures = case.state.status, "test case finished");
        case.state.status == 0
    }
}

/// Run the process-wide registry with configuration from the environment.
///
/// The registry is consumed: cases are dropped once the report is built.
/// An unreadable configuration falls back to defaults with a warning.
pub fn run_all() -> RunReport {
    let config = HarnessConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring invalid harness configuration");
        HarnessConfig::default()
    });
    run_all_with(&config)
}

/// Run the process-wide registry with an explicit configuration
pub fn run_all_with(config: &HarnessConfig) -> RunReport {
    let (mut registry, _running) = registry::take_global();
    Runner::from_config(config).run(&mut registry)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
