use std::process::Command;

use crate::common::{ready_project, run_in, stderr, stdout, write, BINARY_PATH};

const NETLIFY_CHECKLIST: &str = r#"
[files]
required = ["netlify.toml", "package.json"]

[directories]
required = ["dist"]
build_command = "pnpm build"

[[scripts]]
descriptor = "package.json"
required = ["build"]

[platform]
path = "netlify.json"
sections = ["redirects"]

[env]
templates = [".env.example"]

[report]
next_steps = ["Run netlify deploy --prod"]
"#;

#[test]
fn checklist_flag_replaces_defaults() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();
    write(root, "deploy-check.toml", NETLIFY_CHECKLIST);
    write(root, "netlify.toml", "[build]\n");
    write(root, "package.json", r#"{ "scripts": { "build": "vite build" } }"#);
    write(root, "netlify.json", r#"{ "redirects": [] }"#);
    write(root, ".env.example", "API_URL=\n");

    let output = run_in(root, &["--checklist", "deploy-check.toml"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{text}");
    assert!(text.contains("  ❌ Missing: dist (run `pnpm build` first)"));
    assert!(text.contains("  ✅ Section: redirects"));
    assert!(text.contains("  ℹ️ .env.example: 1 variable documented"));
    assert!(!text.contains("vercel.json"));
}

#[test]
fn checklist_env_var_is_honoured() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = temp.path();
    write(
        root,
        "minimal.toml",
        "[files]\nrequired = [\"README.md\"]\n[directories]\nrequired = [\"public\"]\n[[scripts]]\ndescriptor = \"package.json\"\nrequired = [\"start\"]\n[env]\ntemplates = [\"app.env\"]\n[report]\nnext_steps = [\"Ship it\"]\n",
    );
    write(root, "README.md", "# app\n");
    write(root, "package.json", r#"{ "scripts": { "start": "node index.js" } }"#);
    write(root, "public/index.html", "<!doctype html>\n");
    write(root, "app.env", "PORT=3000\n");

    let output = Command::new(BINARY_PATH)
        .current_dir(root)
        .env("DEPLOY_CHECK_CHECKLIST", root.join("minimal.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("deploy-check should run");
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{text}");
    assert!(text.contains("  1. Ship it"));
}

#[test]
fn invalid_checklist_is_fatal_and_checks_nothing() {
    let project = ready_project();
    write(
        project.path(),
        "bad.toml",
        "[files]\nrequired = [\"/etc/hosts\"]\n",
    );

    let output = run_in(project.path(), &["--checklist", "bad.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("files.required"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn missing_checklist_file_is_fatal() {
    let project = ready_project();

    let output = run_in(project.path(), &["--checklist", "nope.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nope.toml"));
}
