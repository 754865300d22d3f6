//! Checklist data: built-in defaults plus an optional TOML overlay.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ChecklistError;

pub mod defaults;
pub mod sections;
pub mod telemetry;

pub use sections::{
    parse_directories_section, parse_env_section, parse_files_section, parse_platform_section,
    parse_report_section, parse_scripts_section, DirectoryChecklist, PlatformChecklist,
    RawDirectoriesSection, RawEnvSection, RawFilesSection, RawPlatformSection, RawReportSection,
    RawScriptRequirement, ScriptRequirement,
};

/// Environment variable naming a checklist file when `--checklist` is absent.
pub const CHECKLIST_ENV_KEY: &str = "DEPLOY_CHECK_CHECKLIST";

/// Everything a run checks, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub files: Vec<PathBuf>,
    pub directories: DirectoryChecklist,
    pub scripts: Vec<ScriptRequirement>,
    pub platform: PlatformChecklist,
    pub env_templates: Vec<PathBuf>,
    pub next_steps: Vec<String>,
    /// File the checklist was loaded from; `None` for the built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawChecklist {
    files: Option<RawFilesSection>,
    directories: Option<RawDirectoriesSection>,
    scripts: Option<Vec<RawScriptRequirement>>,
    platform: Option<RawPlatformSection>,
    env: Option<RawEnvSection>,
    report: Option<RawReportSection>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            files: defaults::REQUIRED_FILES.iter().map(PathBuf::from).collect(),
            directories: sections::default_directory_checklist(),
            scripts: sections::default_script_requirements(),
            platform: sections::default_platform_checklist(),
            env_templates: defaults::ENV_TEMPLATES.iter().map(PathBuf::from).collect(),
            next_steps: defaults::NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
            source_path: None,
        }
    }
}

impl Checklist {
    /// Use the given file if any, otherwise the built-in defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ChecklistError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                telemetry::log_builtin();
                Ok(Self::default())
            }
        }
    }

    /// Load a TOML checklist, keeping defaults for absent sections.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ChecklistError> {
        info!(
            target: "deploy_check::checklist",
            path = %path.display(),
            "Starting checklist load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ChecklistError::from_read_error(path.clone(), err);
            error!(
                target: "deploy_check::checklist",
                path = %path.display(),
                reason = %error,
                "Failed to read checklist file"
            );
            error
        })?;

        let raw: RawChecklist = document.try_deserialize().map_err(|err| {
            let error = ChecklistError::from_parse_error(path.clone(), err);
            error!(
                target: "deploy_check::checklist",
                path = %path.display(),
                reason = %error,
                "Failed to parse checklist file"
            );
            error
        })?;

        let checklist = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "deploy_check::checklist",
                path = %path.display(),
                reason = %err,
                "Failed to validate checklist file"
            );
            err
        })?;

        telemetry::log_loaded(&checklist);
        Ok(checklist)
    }

    fn from_raw(raw: RawChecklist, path: PathBuf) -> Result<Self, ChecklistError> {
        let files = parse_files_section(raw.files, &path)?;
        let directories = parse_directories_section(raw.directories, &path)?;
        let scripts = parse_scripts_section(raw.scripts, &path)?;
        let platform = parse_platform_section(raw.platform, &path)?;
        let env_templates = parse_env_section(raw.env, &path)?;
        let next_steps = parse_report_section(raw.report);

        Ok(Self {
            files,
            directories,
            scripts,
            platform,
            env_templates,
            next_steps,
            source_path: Some(path),
        })
    }
}
