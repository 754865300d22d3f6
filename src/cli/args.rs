//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_checklist_path, resolve_root, RunProfile};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "deploy-check",
    author,
    version,
    about = "Check that the project is ready to deploy",
    long_about = "Check that the project is ready to deploy.\n\nVerifies required files, build outputs, package.json scripts, the platform config (sections and security headers), and reports .env template contents.\n\nExit codes: 0 ready, 1 required checks failed, 2 the check itself could not run."
)]
pub struct CheckArgs {
    /// Project directory to check (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// TOML checklist overriding the built-in one (overrides DEPLOY_CHECK_CHECKLIST).
    #[arg(long, value_name = "PATH")]
    pub checklist: Option<PathBuf>,
}

impl CheckArgs {
    /// Build a `RunProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<RunProfile> {
        let root = resolve_root(self.root)?;
        let checklist_path = resolve_checklist_path(self.checklist);
        Ok(RunProfile {
            root,
            checklist_path,
        })
    }
}
