//! Call-time options for a single load.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_ENV_PATH;

/// Options controlling how the env file is located and reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Env file location. `None` means `DEFAULT_ENV_PATH` in the working directory.
    pub path: Option<PathBuf>,
    /// Emit `tracing` diagnostics describing what was loaded.
    pub debug: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The path that will actually be read: the caller's, or the conventional default.
    pub fn effective_path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_ENV_PATH))
    }
}
