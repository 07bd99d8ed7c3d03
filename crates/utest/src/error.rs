// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by harness setup and reporting
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
