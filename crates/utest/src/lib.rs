// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lightweight in-process test harness.
//!
//! Programs register test cases, then run them once in registration order.
//! Assertions are soft: a failed check is counted on its case and the body
//! keeps running. Bodies can capture what they write to stdout and compare
//! values with type-directed equality rules.
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! fn fac(x: i64) -> i64 {
//!     if x <= 0 { 1 } else { x * fac(x - 1) }
//! }
//!
//! fn main() -> ExitCode {
//!     utest::test_case!(factorial => |ctx| {
//!         utest::check_eq!(ctx, fac(3), 6);
//!         utest::check_eq!(ctx, fac(-10), 1);
//!     });
//!     utest::cli::run_main()
//! }
//! ```

mod assert;
pub mod cli;
pub mod compare;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod env;
mod error;
pub mod logging;
pub mod registry;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use compare::{ArrayEq, ContentEq, Element, Opaque};
pub use config::{ColorMode, HarnessConfig, ReportFormat};
pub use context::RunnerContext;
pub use diagnostics::{Reporter, Severity, SourceLocation};
pub use error::HarnessError;
pub use registry::{register, registered_names, Registry, TestCase, TestOptions};
pub use runner::{run_all, run_all_with, CaseResult, RunReport, Runner};
pub use utest_capture::CapturedOutput;
