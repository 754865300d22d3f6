//! Deployment readiness checks and their report model.
//!
//! Each checker turns one part of the [`Checklist`](crate::checklist::Checklist)
//! into a [`SectionReport`]. The runner folds sections into a [`RunReport`],
//! whose failure lines decide the exit code.

pub mod env_template;
pub mod files;
pub mod platform;
pub mod report;
pub mod runner;
pub mod scripts;

pub use report::{CheckLine, RunReport, SectionReport, Status, Verdict};
pub use runner::run_checks;

/// The single "assert existence/containment" routine every checker uses.
///
/// A present item always passes; a missing one gets `missing_status`, which is
/// `Fail` for required artifacts and `Warn` for recommended ones.
pub fn presence_line(
    present: bool,
    ok_message: impl Into<String>,
    missing_status: Status,
    missing_message: impl Into<String>,
) -> CheckLine {
    if present {
        CheckLine::new(Status::Pass, ok_message)
    } else {
        CheckLine::new(missing_status, missing_message)
    }
}
