//! Tests for settings loading and CLI overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use strictly_rewind_tui::{Cli, Settings};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.log_file(), &PathBuf::from("strictly_rewind.log"));
    assert_eq!(settings.log_filter(), "info");
    assert!(*settings.show_help());
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("log_filter = \"debug\"\n");

    let settings = Settings::from_file(file.path()).expect("valid config");
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(settings.log_file(), &PathBuf::from("strictly_rewind.log"));
    assert!(*settings.show_help());
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config(
        "log_file = \"from_file.log\"\nlog_filter = \"warn\"\nshow_help = true\n",
    );
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::parse_from([
        "strictly_rewind",
        "--config",
        path.as_str(),
        "--log-file",
        "from_cli.log",
        "--no-help",
    ]);

    let settings = Settings::load(&cli).expect("valid config");
    assert_eq!(settings.log_file(), &PathBuf::from("from_cli.log"));
    assert_eq!(settings.log_filter(), "warn");
    assert!(!*settings.show_help());
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cli = Cli {
        config: Some(dir.path().join("nope.toml")),
        ..Cli::default()
    };

    let err = Settings::load(&cli).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let file = write_config("show_help = \"sometimes\"\n");

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
