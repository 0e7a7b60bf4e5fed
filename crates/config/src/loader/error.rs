//! Error types for environment loading.
//!
//! Responsibilities:
//! - Distinguish file-load failures from validation failures.
//! - Attach the effective env file path to validation failures.
//!
//! Invariants:
//! - File-load failures are passed through from `dotenvy` without added context.
//! - Validation failures always name the file that was loaded.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::{Issue, ValidationError};

/// Errors returned by `load_env` and `EnvLoader::load`.
#[derive(Error, Debug)]
pub enum LoadEnvError {
    /// The env file could not be found, read, or parsed.
    #[error(transparent)]
    FileLoad(#[from] dotenvy::Error),

    /// The merged environment did not satisfy the schema.
    #[error(
        "Invalid configuration loaded. Check these values in your {path} file: {source}",
        path = .path.display()
    )]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

impl LoadEnvError {
    pub fn is_file_load(&self) -> bool {
        matches!(self, LoadEnvError::FileLoad(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LoadEnvError::Validation { .. })
    }

    /// Issues behind a validation failure; empty for file-load failures.
    pub fn validation_issues(&self) -> &[Issue] {
        match self {
            LoadEnvError::Validation { source, .. } => source.issues(),
            LoadEnvError::FileLoad(_) => &[],
        }
    }
}
