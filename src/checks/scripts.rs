//! Required `"scripts"` entries in package descriptors.

use std::path::Path;

use serde_json::Value;

use crate::{
    checklist::ScriptRequirement,
    lib::{
        errors::CheckError,
        fs::{path_exists, read_json},
    },
};

use super::{presence_line, SectionReport, Status};

/// Check every descriptor that exists; absent descriptors are skipped silently.
///
/// A descriptor that cannot be read or parsed aborts the whole run.
pub fn check_scripts(
    root: &Path,
    requirements: &[ScriptRequirement],
) -> Result<SectionReport, CheckError> {
    let mut section = SectionReport::new("📜 Checking package.json scripts...");
    for requirement in requirements {
        let path = root.join(&requirement.descriptor);
        if !path_exists(&path) {
            continue;
        }

        let document = read_json(&path)?;
        let shown = requirement.descriptor.display();
        for script in &requirement.scripts {
            section.push(presence_line(
                has_script(&document, script),
                format!("{shown}: {script}"),
                Status::Fail,
                format!("{shown}: missing script \"{script}\""),
            ));
        }
    }
    Ok(section)
}

/// Any value counts, including `""` and non-strings.
pub fn has_script(document: &Value, name: &str) -> bool {
    document
        .get("scripts")
        .and_then(Value::as_object)
        .is_some_and(|scripts| scripts.contains_key(name))
}
