use std::process::Command;

use crate::common::BINARY_PATH;

#[test]
fn help_lists_flags_and_exit_codes() {
    let output = Command::new(BINARY_PATH)
        .arg("--help")
        .output()
        .expect("deploy-check should run");
    assert!(output.status.success(), "deploy-check --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["--root", "--checklist", "Exit codes"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn version_output_uses_name_and_semver_format() {
    let output = Command::new(BINARY_PATH)
        .arg("--version")
        .output()
        .expect("deploy-check should run");
    assert!(output.status.success(), "deploy-check --version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let mut parts = stdout.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let version = parts.next().unwrap_or_default();

    assert_eq!(name, "deploy-check", "unexpected binary name: {stdout}");
    assert!(
        version.chars().all(|c| c.is_ascii_digit() || c == '.') && version.split('.').count() == 3,
        "version should look like SemVer (X.Y.Z), got: {stdout}"
    );
    assert!(parts.next().is_none(), "version output should be two tokens");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = Command::new(BINARY_PATH)
        .arg("--json")
        .output()
        .expect("deploy-check should run");

    assert_eq!(output.status.code(), Some(2));
}
