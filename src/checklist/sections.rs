use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ChecklistError;

use super::defaults::{
    DEFAULT_BUILD_COMMAND, ENV_TEMPLATES, NEXT_STEPS, PLATFORM_CONFIG_PATH, PLATFORM_SECTIONS,
    REQUIRED_DIRECTORIES, REQUIRED_FILES, SCRIPT_REQUIREMENTS, SECURITY_HEADERS,
};

/// Build-output directories and the command that produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryChecklist {
    pub required: Vec<PathBuf>,
    pub build_command: String,
}

/// Scripts that must appear under `"scripts"` in one package descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequirement {
    pub descriptor: PathBuf,
    pub scripts: Vec<String>,
}

/// Platform configuration document and what it should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformChecklist {
    pub path: PathBuf,
    pub sections: Vec<String>,
    pub security_headers: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawFilesSection {
    pub required: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDirectoriesSection {
    pub required: Option<Vec<String>>,
    pub build_command: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawScriptRequirement {
    pub descriptor: String,
    #[serde(default)]
    pub required: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPlatformSection {
    pub path: Option<String>,
    pub sections: Option<Vec<String>>,
    pub security_headers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawEnvSection {
    pub templates: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub next_steps: Option<Vec<String>>,
}

pub fn parse_files_section(
    raw: Option<RawFilesSection>,
    path: &Path,
) -> Result<Vec<PathBuf>, ChecklistError> {
    match raw.unwrap_or_default().required {
        Some(required) => relative_paths(required, "files.required", path),
        None => Ok(REQUIRED_FILES.iter().map(PathBuf::from).collect()),
    }
}

pub fn parse_directories_section(
    raw: Option<RawDirectoriesSection>,
    path: &Path,
) -> Result<DirectoryChecklist, ChecklistError> {
    let raw = raw.unwrap_or_default();
    let required = match raw.required {
        Some(required) => relative_paths(required, "directories.required", path)?,
        None => REQUIRED_DIRECTORIES.iter().map(PathBuf::from).collect(),
    };
    let build_command = match raw.build_command {
        Some(command) if command.trim().is_empty() => {
            return Err(ChecklistError::InvalidField {
                path: path.to_path_buf(),
                field: "directories.build_command",
                message: "must not be empty".into(),
            })
        }
        Some(command) => command,
        None => DEFAULT_BUILD_COMMAND.to_string(),
    };
    Ok(DirectoryChecklist {
        required,
        build_command,
    })
}

pub fn parse_scripts_section(
    raw: Option<Vec<RawScriptRequirement>>,
    path: &Path,
) -> Result<Vec<ScriptRequirement>, ChecklistError> {
    let Some(raw) = raw else {
        return Ok(default_script_requirements());
    };

    raw.into_iter()
        .map(|entry| {
            let descriptor = relative_path(entry.descriptor, "scripts.descriptor", path)?;
            if entry.required.iter().any(|name| name.trim().is_empty()) {
                return Err(ChecklistError::InvalidField {
                    path: path.to_path_buf(),
                    field: "scripts.required",
                    message: format!("empty script name for {}", descriptor.display()),
                });
            }
            Ok(ScriptRequirement {
                descriptor,
                scripts: entry.required,
            })
        })
        .collect()
}

pub fn parse_platform_section(
    raw: Option<RawPlatformSection>,
    path: &Path,
) -> Result<PlatformChecklist, ChecklistError> {
    let raw = raw.unwrap_or_default();
    let config_path = match raw.path {
        Some(value) => relative_path(value, "platform.path", path)?,
        None => PathBuf::from(PLATFORM_CONFIG_PATH),
    };
    Ok(PlatformChecklist {
        path: config_path,
        sections: raw.sections.unwrap_or_else(|| owned(&PLATFORM_SECTIONS)),
        security_headers: raw
            .security_headers
            .unwrap_or_else(|| owned(&SECURITY_HEADERS)),
    })
}

pub fn parse_env_section(
    raw: Option<RawEnvSection>,
    path: &Path,
) -> Result<Vec<PathBuf>, ChecklistError> {
    match raw.unwrap_or_default().templates {
        Some(templates) => relative_paths(templates, "env.templates", path),
        None => Ok(ENV_TEMPLATES.iter().map(PathBuf::from).collect()),
    }
}

pub fn parse_report_section(raw: Option<RawReportSection>) -> Vec<String> {
    raw.unwrap_or_default()
        .next_steps
        .unwrap_or_else(|| owned(&NEXT_STEPS))
}

pub fn default_script_requirements() -> Vec<ScriptRequirement> {
    SCRIPT_REQUIREMENTS
        .iter()
        .map(|(descriptor, scripts)| ScriptRequirement {
            descriptor: PathBuf::from(descriptor),
            scripts: owned(scripts),
        })
        .collect()
}

pub fn default_platform_checklist() -> PlatformChecklist {
    PlatformChecklist {
        path: PathBuf::from(PLATFORM_CONFIG_PATH),
        sections: owned(&PLATFORM_SECTIONS),
        security_headers: owned(&SECURITY_HEADERS),
    }
}

pub fn default_directory_checklist() -> DirectoryChecklist {
    DirectoryChecklist {
        required: REQUIRED_DIRECTORIES.iter().map(PathBuf::from).collect(),
        build_command: DEFAULT_BUILD_COMMAND.to_string(),
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn relative_paths(
    values: Vec<String>,
    field: &'static str,
    path: &Path,
) -> Result<Vec<PathBuf>, ChecklistError> {
    values
        .into_iter()
        .map(|value| relative_path(value, field, path))
        .collect()
}

// Checklist paths resolve against --root, so absolute entries are rejected.
fn relative_path(
    value: String,
    field: &'static str,
    path: &Path,
) -> Result<PathBuf, ChecklistError> {
    let candidate = PathBuf::from(value.trim());
    if candidate.as_os_str().is_empty() {
        return Err(ChecklistError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "paths must not be empty".into(),
        });
    }
    if candidate.is_absolute() {
        return Err(ChecklistError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: format!("`{}` must be relative to the project root", candidate.display()),
        });
    }
    Ok(candidate)
}
