// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! Layered as defaults, then an optional TOML file, then `UTEST_*`
//! environment variables. Command-line flags are applied on top by
//! [`crate::cli`].

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::HarnessError;

/// When to emit ANSI colours
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour streams attached to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the target stream is a terminal
    pub fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <ColorMode as ValueEnum>::from_str(s, true)
    }
}

/// How the final report is emitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Progress markers and summary line on stdout
    #[default]
    Text,
    /// JSON report on stdout, textual report moved to stderr
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <ReportFormat as ValueEnum>::from_str(s, true)
    }
}

/// Harness configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// ANSI colour mode
    #[serde(default)]
    pub color: ColorMode,

    /// Only run cases whose name contains this substring
    #[serde(default)]
    pub filter: Option<String>,

    /// Report format
    #[serde(default)]
    pub format: ReportFormat,
}

impl HarnessConfig {
    /// Parse a TOML document
    pub fn from_toml(text: &str) -> Result<Self, HarnessError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|source| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Defaults, overlaid with the `UTEST_CONFIG` file and `UTEST_*` variables
    pub fn from_env() -> Result<Self, HarnessError> {
        let base = match env::config_path() {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Apply `UTEST_COLOR`, `UTEST_FILTER` and `UTEST_FORMAT`
    pub fn with_env_overrides(self) -> Result<Self, HarnessError> {
        self.with_overrides(env::color(), env::filter(), env::format())
    }

    fn with_overrides(
        mut self,
        color: Option<String>,
        filter: Option<String>,
        format: Option<String>,
    ) -> Result<Self, HarnessError> {
        if let Some(value) = color {
            self.color = value.parse().map_err(|_| HarnessError::InvalidEnv {
                name: env::UTEST_COLOR,
                value,
            })?;
        }
        if let Some(value) = format {
            self.format = value.parse().map_err(|_| HarnessError::InvalidEnv {
                name: env::UTEST_FORMAT,
                value,
            })?;
        }
        if filter.is_some() {
            self.filter = filter;
        }
        Ok(self)
    }

    /// Whether a case with this name is selected by the filter
    pub fn selects(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |pattern| name.contains(pattern))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
