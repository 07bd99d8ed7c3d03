// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by the harness are named here.

use std::path::PathBuf;

/// Path to a TOML harness config file
pub const UTEST_CONFIG: &str = "UTEST_CONFIG";
/// Colour mode override: `auto`, `always` or `never`
pub const UTEST_COLOR: &str = "UTEST_COLOR";
/// Only run cases whose name contains this substring
pub const UTEST_FILTER: &str = "UTEST_FILTER";
/// Report format override: `text` or `json`
pub const UTEST_FORMAT: &str = "UTEST_FORMAT";
/// Tracing filter directives for internal logging
pub const UTEST_LOG: &str = "UTEST_LOG";

/// `UTEST_CONFIG`: config file path.
pub fn config_path() -> Option<PathBuf> {
    non_empty(UTEST_CONFIG).map(PathBuf::from)
}

/// `UTEST_COLOR`: raw colour mode string.
pub fn color() -> Option<String> {
    non_empty(UTEST_COLOR)
}

/// `UTEST_FILTER`: case name filter.
pub fn filter() -> Option<String> {
    non_empty(UTEST_FILTER)
}

/// `UTEST_FORMAT`: raw report format string.
pub fn format() -> Option<String> {
    non_empty(UTEST_FORMAT)
}

/// `UTEST_LOG`: tracing filter. Default `warn`.
pub fn log_filter() -> Option<String> {
    non_empty(UTEST_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
