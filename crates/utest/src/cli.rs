// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line entry point for test programs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::{ColorMode, HarnessConfig, ReportFormat};
use crate::error::HarnessError;
use crate::registry;
use crate::runner::{self, RunReport};

/// Run the registered test cases
#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Run the registered test cases")]
pub struct Cli {
    /// TOML config file
    #[arg(long, value_name = "PATH", env = crate::env::UTEST_CONFIG)]
    pub config: Option<PathBuf>,

    /// When to colour the report
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Only run cases whose name contains this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Print the registered case names and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Config file, then `UTEST_*` variables, then these flags
    pub fn resolve_config(&self) -> Result<HarnessConfig, HarnessError> {
        let base = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        Ok(self.apply(base.with_env_overrides()?))
    }

    fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.filter.is_some() {
            config.filter = self.filter.clone();
        }
        config
    }
}

/// Parse arguments, run the process-wide registry and map the number of
/// failed cases to the exit code.
pub fn run_main() -> ExitCode {
    crate::logging::init();
    let cli = Cli::parse();
    match run_with(&cli) {
        Ok(failed) => exit_code(failed),
        Err(e) => {
            eprintln!("utest: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_with(cli: &Cli) -> Result<usize, HarnessError> {
    let config = cli.resolve_config()?;

    if cli.list {
        for name in registry::registered_names() {
            if config.selects(&name) {
                println!("{}", name);
            }
        }
        return Ok(0);
    }

    let report = runner::run_all_with(&config);
    if config.format == ReportFormat::Json {
        print_json(&report)?;
    }
    Ok(report.failed)
}

fn print_json(report: &RunReport) -> Result<(), HarnessError> {
    println!("{}", report.to_json()?);
    Ok(())
}

/// Failed-case count as a process exit code, saturating at 255
pub fn exit_code(failed: usize) -> ExitCode {
    ExitCode::from(u8::try_from(failed).unwrap_or(u8::MAX))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
