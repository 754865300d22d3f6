use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating a checklist file.
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// Failed to build (read) the checklist file.
    #[error("Failed to read checklist file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse checklist file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Checklist file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ChecklistError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while reading a project document during a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CheckError {
    /// Path of the document that could not be used.
    pub fn path(&self) -> &PathBuf {
        match self {
            CheckError::Read { path, .. } | CheckError::Json { path, .. } => path,
        }
    }

    /// Short reason without the path prefix, for report lines.
    pub fn reason(&self) -> String {
        match self {
            CheckError::Read { source, .. } => source.to_string(),
            CheckError::Json { source, .. } => source.to_string(),
        }
    }
}
