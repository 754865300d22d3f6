//! Informational variable counts for `.env` templates.

use std::path::{Path, PathBuf};

use crate::lib::fs::read_env_template;

use super::{CheckLine, SectionReport, Status};

/// Informational only: never produces a failure; absent templates are skipped.
pub fn report_env_templates(root: &Path, templates: &[PathBuf]) -> SectionReport {
    let mut section = SectionReport::new("🌍 Checking environment templates...");
    for relative in templates {
        let shown = relative.display();
        match read_env_template(&root.join(relative)) {
            Ok(Some(count)) => {
                let noun = if count == 1 { "variable" } else { "variables" };
                section.push(CheckLine::new(
                    Status::Info,
                    format!("{shown}: {count} {noun} documented"),
                ))
            }
            Ok(None) => {}
            Err(err) => section.push(CheckLine::new(
                Status::Warn,
                format!("{shown}: could not be read ({})", err.reason()),
            )),
        }
    }
    section
}
