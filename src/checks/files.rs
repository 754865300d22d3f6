//! Required files and build-output directories.

use std::path::{Path, PathBuf};

use crate::{checklist::DirectoryChecklist, lib::fs::path_exists};

use super::{presence_line, SectionReport, Status};

pub fn check_files(root: &Path, files: &[PathBuf]) -> SectionReport {
    let mut section = SectionReport::new("📁 Checking required files...");
    for relative in files {
        let shown = relative.display();
        section.push(presence_line(
            path_exists(&root.join(relative)),
            shown.to_string(),
            Status::Fail,
            format!("Missing: {shown}"),
        ));
    }
    section
}

/// Existence only; a file sitting where a directory is expected still passes.
pub fn check_directories(root: &Path, directories: &DirectoryChecklist) -> SectionReport {
    let mut section = SectionReport::new("🏗️  Checking build outputs...");
    for relative in &directories.required {
        let shown = relative.display();
        section.push(presence_line(
            path_exists(&root.join(relative)),
            shown.to_string(),
            Status::Fail,
            format!(
                "Missing: {shown} (run `{}` first)",
                directories.build_command
            ),
        ));
    }
    section
}
