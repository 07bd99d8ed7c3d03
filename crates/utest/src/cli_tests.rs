// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

use std::io::Write;

#[test]
fn test_parse_flags() {
    let cli = Cli::try_parse_from([
        "selftest",
        "--color",
        "never",
        "--filter",
        "arr_",
        "--format",
        "json",
        "--list",
    ])
    .unwrap();
    assert_eq!(cli.color, Some(ColorMode::Never));
    assert_eq!(cli.filter.as_deref(), Some("arr_"));
    assert_eq!(cli.format, Some(ReportFormat::Json));
    assert!(cli.list);
}

#[test]
fn test_unknown_color_is_rejected() {
    assert!(Cli::try_parse_from(["selftest", "--color", "rainbow"]).is_err());
}

#[test]
fn test_flags_override_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "color = \"always\"\nfilter = \"eq\"").unwrap();
    file.flush().unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        filter: Some("factorial".to_string()),
        ..Cli::default()
    };
    let config = cli.apply(HarnessConfig::load(file.path()).unwrap());
    assert_eq!(config.color, ColorMode::Always);
    assert_eq!(config.filter.as_deref(), Some("factorial"));
    assert_eq!(config.format, ReportFormat::Text);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = Cli {
        config: Some(PathBuf::from("/nonexistent/utest.toml")),
        ..Cli::default()
    };
    assert!(matches!(
        cli.resolve_config(),
        Err(HarnessError::ConfigRead { .. })
    ));
}

#[test]
fn test_exit_code_saturates() {
    assert_eq!(exit_code(0), ExitCode::from(0));
    assert_eq!(exit_code(3), ExitCode::from(3));
    assert_eq!(exit_code(10_000), ExitCode::from(255));
}
