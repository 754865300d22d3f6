use std::fs;

use serde_json::json;

use crate::common::{ready_project, run_in, stderr, stdout, write, write_json};

#[test]
fn ready_project_passes_with_no_failures_or_warnings() {
    let project = ready_project();

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{text}");
    assert!(!text.contains("❌"), "unexpected failure line:\n{text}");
    assert!(!text.contains("⚠️"), "unexpected warning line:\n{text}");
    assert!(text.contains("All checks passed"));
    assert!(text.contains("Next steps:"));
    assert!(text.contains("  ℹ️ client/.env.example: 3 variables documented"));
    assert!(text.contains("  ℹ️ server/.env.example: 2 variables documented"));
    assert!(text.contains("  ✅ Security header: Referrer-Policy"));
}

#[test]
fn removing_one_directory_fails_only_that_check() {
    let project = ready_project();
    fs::remove_dir_all(project.path().join("server/dist")).expect("remove server/dist");

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{text}");
    let failures: Vec<&str> = text.lines().filter(|line| line.contains("❌")).collect();
    assert_eq!(
        failures,
        vec![
            "  ❌ Missing: server/dist (run `npm run build` first)",
            "❌ Deployment check failed.",
            "Please fix the issues marked ❌ above before deploying.",
        ]
    );
    assert!(!text.contains("Next steps:"));
}

#[test]
fn missing_script_entry_fails_the_run() {
    let project = ready_project();
    write_json(
        project.path(),
        "server/package.json",
        &json!({ "scripts": { "dev": "tsx watch src", "build": "tsc" } }),
    );

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("  ❌ server/package.json: missing script \"start\""));
    assert!(text.contains("  ✅ server/package.json: build"));
}

#[test]
fn malformed_platform_config_fails_but_later_checks_run() {
    let project = ready_project();
    write(project.path(), "vercel.json", "{ \"headers\": [");

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("  ❌ vercel.json is not usable:"));
    assert!(!text.contains("Section:"));
    assert!(!text.contains("Checking security headers"));
    assert!(text.contains("client/.env.example: 3 variables documented"));
}

#[test]
fn missing_security_header_only_warns() {
    let project = ready_project();
    let mut config = crate::common::platform_config();
    config["headers"][0]["headers"]
        .as_array_mut()
        .expect("headers array")
        .retain(|entry| entry["key"] != "X-XSS-Protection");
    write_json(project.path(), "vercel.json", &config);

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{text}");
    assert!(text.contains("  ⚠️ Missing security header: X-XSS-Protection"));
}

#[test]
fn malformed_descriptor_aborts_with_fatal_exit_code() {
    let project = ready_project();
    write(project.path(), "client/package.json", "{ \"scripts\": ");

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(2), "stdout:\n{text}");
    assert!(text.contains("Checking build outputs"));
    assert!(!text.contains("Checking vercel.json configuration"));
    assert!(!text.contains("Deployment check failed"));
    assert!(
        stderr(&output).contains("client/package.json"),
        "stderr should name the descriptor:\n{}",
        stderr(&output)
    );
}

#[test]
fn missing_descriptor_is_reported_by_file_check_only() {
    let project = ready_project();
    fs::remove_file(project.path().join("client/package.json")).expect("remove descriptor");

    let output = run_in(project.path(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("  ❌ Missing: client/package.json"));
    assert!(!text.contains("client/package.json: "));
}

#[test]
fn repeated_runs_are_identical() {
    let project = ready_project();
    fs::remove_file(project.path().join("DEPLOYMENT.md")).expect("remove doc");

    let first = run_in(project.path(), &[]);
    let second = run_in(project.path(), &[]);

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn root_flag_checks_another_directory() {
    let project = ready_project();
    let elsewhere = tempfile::tempdir().expect("create temp dir");

    let output = run_in(
        elsewhere.path(),
        &["--root", project.path().to_str().expect("utf-8 path")],
    );

    assert_eq!(output.status.code(), Some(0), "stdout:\n{}", stdout(&output));
}
