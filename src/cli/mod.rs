//! CLI entrypoint module structure.
use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Error, Result};

use crate::{
    checklist::Checklist,
    checks::{run_checks, Verdict},
};

pub mod args;
pub mod profile;

pub use args::CheckArgs;
pub use profile::{resolve_checklist_path, resolve_root, RunProfile};

/// Exit code for runs that could not complete (bad checklist, unusable descriptor).
pub const FATAL_EXIT_CODE: u8 = 2;

/// Bundles a fatal error message with an exit code.
#[derive(Debug)]
pub struct FatalExit {
    message: String,
    exit_code: u8,
}

impl FatalExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: FATAL_EXIT_CODE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }
}

/// Load the checklist, run every check, and write the report to `out`.
pub fn execute(profile: &RunProfile, out: &mut impl Write) -> Result<Verdict> {
    let checklist = Checklist::load(profile.checklist_path.clone())?;
    tracing::info!(
        target: "deploy_check::checks",
        root = %profile.root.display(),
        "Starting deployment readiness check"
    );

    writeln!(out, "🚀 Checking deployment readiness...")?;
    let mut write_error: Option<io::Error> = None;
    let report = run_checks(&profile.root, &checklist, |section| {
        if write_error.is_none() {
            if let Err(err) = out.write_all(section.render().as_bytes()) {
                write_error = Some(err);
            }
        }
    })
    .with_context(|| format!("checking {} aborted", profile.root.display()))?;
    if let Some(err) = write_error {
        return Err(err).context("failed to write report");
    }

    write!(out, "{}", report.render_summary(&checklist.next_steps))?;
    out.flush()?;

    let verdict = report.verdict();
    tracing::info!(
        target: "deploy_check::checks",
        ?verdict,
        failures = report.count(crate::checks::Status::Fail),
        warnings = report.count(crate::checks::Status::Warn),
        "Finished deployment readiness check"
    );
    Ok(verdict)
}
