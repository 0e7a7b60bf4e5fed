//! Environment loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` that reads an env file, overlays the ambient
//!   environment, and validates the result against a `Schema`.
//! - Provide the `load_env` convenience entry point for the common case.
//!
//! Does NOT handle:
//! - Env file syntax (delegated to dotenvy via dotenv.rs).
//! - Field types, coercion, and constraints (delegated to the `Schema`).
//!
//! Invariants / Assumptions:
//! - The file is read before the schema runs; a file failure means the schema is never called.
//! - Ambient variables take precedence over file values.
//! - Nothing is cached; each `load` re-reads the file and the ambient source.
//! - Diagnostics are only emitted when `debug` is enabled and never include values.

use std::path::PathBuf;

use tracing::debug;

use super::dotenv::read_env_file;
use super::env::{EnvSource, ProcessEnv, overlay};
use super::error::LoadEnvError;
use super::options::LoadOptions;
use crate::constants::DEBUG_TARGET;
use crate::schema::Schema;

/// Loads an env file and validates it against a schema.
#[derive(Debug, Clone)]
pub struct EnvLoader<E = ProcessEnv> {
    options: LoadOptions,
    ambient: E,
}

impl Default for EnvLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader<ProcessEnv> {
    /// Create a loader that reads `.env` and overlays the process environment.
    pub fn new() -> Self {
        Self {
            options: LoadOptions::default(),
            ambient: ProcessEnv,
        }
    }
}

impl<E: EnvSource> EnvLoader<E> {
    /// Replace all options at once.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the env file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.path = Some(path.into());
        self
    }

    /// Enable diagnostic output while loading.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    /// Use `ambient` instead of the process environment (primarily for testing).
    pub fn with_ambient<A: EnvSource>(self, ambient: A) -> EnvLoader<A> {
        EnvLoader {
            options: self.options,
            ambient,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load the env file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The env file is missing, unreadable, or malformed (`LoadEnvError::FileLoad`)
    /// - The merged environment fails the schema (`LoadEnvError::Validation`)
    pub fn load<S>(&self, schema: &S) -> Result<S::Output, LoadEnvError>
    where
        S: Schema + ?Sized,
    {
        let path = self.options.effective_path();
        let _span = self
            .options
            .debug
            .then(|| tracing::debug_span!(target: DEBUG_TARGET, "load_env", path = %path.display()).entered());

        let file_values = read_env_file(path)?;
        if self.options.debug {
            debug!(
                target: DEBUG_TARGET,
                path = %path.display(),
                count = file_values.len(),
                keys = ?file_values.keys().collect::<Vec<_>>(),
                "Loaded env file"
            );
        }

        let (merged, overridden) = overlay(file_values, &self.ambient);
        if self.options.debug && !overridden.is_empty() {
            debug!(
                target: DEBUG_TARGET,
                keys = ?overridden,
                "Ambient environment overrides env file values"
            );
        }

        schema
            .validate(&merged)
            .map_err(|source| LoadEnvError::Validation {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Load and validate the env file using the process environment.
///
/// `options` of `None` reads `.env` from the working directory without diagnostics.
pub fn load_env<S>(schema: &S, options: Option<LoadOptions>) -> Result<S::Output, LoadEnvError>
where
    S: Schema + ?Sized,
{
    EnvLoader::new()
        .with_options(options.unwrap_or_default())
        .load(schema)
}
