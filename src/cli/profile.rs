//! RunProfile and root/checklist resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::checklist::CHECKLIST_ENV_KEY;

/// Resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunProfile {
    pub root: PathBuf,
    pub checklist_path: Option<PathBuf>,
}

/// Resolve the project root: CLI override → current directory.
pub fn resolve_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(resolve_root_from(override_root, &cwd))
}

fn resolve_root_from(override_root: Option<PathBuf>, cwd: &Path) -> PathBuf {
    match override_root {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}

/// Resolve the checklist file in the order: CLI override → env var → none.
pub fn resolve_checklist_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_checklist_path_from(override_path, env::var_os(CHECKLIST_ENV_KEY))
}

fn resolve_checklist_path_from(
    override_path: Option<PathBuf>,
    env_value: Option<std::ffi::OsString>,
) -> Option<PathBuf> {
    override_path.or_else(|| {
        env_value
            .filter(|value| !value.to_string_lossy().trim().is_empty())
            .map(PathBuf::from)
    })
}
