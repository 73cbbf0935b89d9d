//! Tests for the command-line surface

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use pyforge::cli::Cli;

#[test]
fn test_cli_packager_override() {
    let cli = Cli::parse_from(["pyforge", "--packager", "/opt/bin/pyinstaller"]);
    assert_eq!(cli.packager, "/opt/bin/pyinstaller");
}

#[test]
fn test_cli_rejects_unknown_flags() {
    assert!(Cli::try_parse_from(["pyforge", "--onefile"]).is_err());
}

#[test]
fn test_binary_version() {
    Command::cargo_bin("pyforge")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_binary_help_hides_packager_override() {
    Command::cargo_bin("pyforge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pyforge"))
        .stdout(predicate::str::contains("--packager").not());
}
