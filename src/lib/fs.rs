//! Filesystem helpers shared by the checkers.

use std::{fs, io, path::Path};

use serde_json::Value;

use crate::lib::errors::CheckError;

/// Marker that starts a comment line in `.env` templates.
pub const ENV_COMMENT_MARKER: char = '#';

/// Returns true if anything (file, directory, symlink target) exists at `path`.
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String, CheckError> {
    fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON document.
///
/// Every JSON input of a run goes through here; callers decide whether the
/// error is fatal or only fails their own check.
pub fn read_json(path: &Path) -> Result<Value, CheckError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| CheckError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Count variable lines in an env template: non-blank after trimming and not
/// starting with the comment marker.
pub fn count_env_entries(text: &str) -> usize {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(ENV_COMMENT_MARKER))
        .count()
}

/// Read an env template if it exists. `Ok(None)` means the file is absent.
pub fn read_env_template(path: &Path) -> Result<Option<usize>, CheckError> {
    match read_text(path) {
        Ok(text) => Ok(Some(count_env_entries(&text))),
        Err(CheckError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
