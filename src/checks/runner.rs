//! Fixed-order execution of every checker.
//!
//! Malformed JSON is handled in exactly two ways, decided here:
//! a package descriptor that fails to parse aborts the run (`Err`), while a
//! platform document that fails to parse is a `Fail` line in its own section
//! and the remaining checks still run.

use std::path::Path;

use crate::{checklist::Checklist, lib::errors::CheckError, lib::telemetry::SectionSpan};

use super::{env_template, files, platform, scripts, RunReport, SectionReport, Status};

/// Run all checks against `root`.
///
/// `emit` sees each section as soon as it completes, so output already shown
/// survives a fatal descriptor error. Sections with no lines are dropped.
pub fn run_checks(
    root: &Path,
    checklist: &Checklist,
    mut emit: impl FnMut(&SectionReport),
) -> Result<RunReport, CheckError> {
    let mut report = RunReport::default();
    let mut record = |name: &'static str, sections: Vec<SectionReport>, span: SectionSpan| {
        let passed: usize = sections.iter().map(|s| s.count(Status::Pass)).sum();
        let failed: usize = sections.iter().map(|s| s.count(Status::Fail)).sum();
        let warnings: usize = sections.iter().map(|s| s.count(Status::Warn)).sum();
        span.finish(passed, failed, warnings);
        for section in sections.into_iter().filter(|s| !s.lines.is_empty()) {
            tracing::trace!(target: "deploy_check::checks", check = name, title = %section.title);
            emit(&section);
            report.push(section);
        }
    };

    let span = SectionSpan::start("files");
    record("files", vec![files::check_files(root, &checklist.files)], span);

    let span = SectionSpan::start("directories");
    let section = files::check_directories(root, &checklist.directories);
    record("directories", vec![section], span);

    let span = SectionSpan::start("scripts");
    let section = scripts::check_scripts(root, &checklist.scripts).inspect_err(|err| {
        tracing::error!(
            target: "deploy_check::checks",
            path = %err.path().display(),
            reason = %err,
            "Package descriptor unusable; aborting run"
        );
    })?;
    record("scripts", vec![section], span);

    let span = SectionSpan::start("platform");
    record("platform", platform::check_platform(root, &checklist.platform), span);

    let span = SectionSpan::start("env_templates");
    let section = env_template::report_env_templates(root, &checklist.env_templates);
    record("env_templates", vec![section], span);

    Ok(report)
}
