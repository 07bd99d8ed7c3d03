// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Internal logging setup.
//!
//! Log records go to stderr so they never end up in a stdout capture.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber, filtered by `UTEST_LOG`.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let directives = env::log_filter().unwrap_or_else(|| DEFAULT_FILTER.to_string());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("utest: invalid {} value {:?}: {}", env::UTEST_LOG, directives, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
