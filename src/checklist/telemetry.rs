use tracing::{debug, info};

use super::{Checklist, CHECKLIST_ENV_KEY};

pub fn log_builtin() {
    debug!(
        target: "deploy_check::checklist",
        env = CHECKLIST_ENV_KEY,
        "No checklist file given; using built-in checklist"
    );
}

pub fn log_loaded(checklist: &Checklist) {
    info!(
        target: "deploy_check::checklist",
        path = %checklist
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        files = checklist.files.len(),
        directories = checklist.directories.required.len(),
        descriptors = checklist.scripts.len(),
        platform_config = %checklist.platform.path.display(),
        env_templates = checklist.env_templates.len(),
        "Checklist file loaded successfully"
    );
}
