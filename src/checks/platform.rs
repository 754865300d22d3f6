//! Platform configuration document: recommended sections and security headers.

use std::{collections::HashSet, path::Path};

use serde_json::Value;

use crate::{
    checklist::PlatformChecklist,
    lib::fs::{path_exists, read_json},
};

use super::{presence_line, CheckLine, SectionReport, Status};

/// Check the platform document if it exists.
///
/// Returns no sections when the document is absent, one section when it does
/// not parse or has no header rules, and two when header rules are present.
/// A parse failure is the only outcome here that fails the run.
pub fn check_platform(root: &Path, platform: &PlatformChecklist) -> Vec<SectionReport> {
    let path = root.join(&platform.path);
    if !path_exists(&path) {
        return Vec::new();
    }

    let shown = platform.path.display();
    let mut config = SectionReport::new(format!("⚙️  Checking {shown} configuration..."));
    let document = match read_json(&path) {
        Ok(document) => document,
        Err(err) => {
            config.push(CheckLine::new(
                Status::Fail,
                format!("{shown} is not usable: {}", err.reason()),
            ));
            return vec![config];
        }
    };

    for name in &platform.sections {
        config.push(presence_line(
            document.get(name).is_some(),
            format!("Section: {name}"),
            Status::Warn,
            format!("Missing recommended section: {name}"),
        ));
    }

    let mut sections = vec![config];
    if let Some(present) = header_keys(&document) {
        let mut headers = SectionReport::new("🔐 Checking security headers...");
        for name in &platform.security_headers {
            headers.push(presence_line(
                present.contains(name.as_str()),
                format!("Security header: {name}"),
                Status::Warn,
                format!("Missing security header: {name}"),
            ));
        }
        sections.push(headers);
    }
    sections
}

/// Header names under `headers[0].headers[*].key`, or `None` when that shape
/// is absent. Entries without a string `key` are ignored.
pub fn header_keys(document: &Value) -> Option<HashSet<&str>> {
    let rules = document.get("headers")?.as_array()?;
    let entries = rules.first()?.get("headers")?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.get("key").and_then(Value::as_str))
            .collect(),
    )
}
