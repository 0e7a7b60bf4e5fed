//! Centralized constants for environment loading.

/// Env file loaded when the caller does not supply a path, relative to the working directory.
pub const DEFAULT_ENV_PATH: &str = ".env";

/// `tracing` target for diagnostics emitted when debug loading is requested.
pub const DEBUG_TARGET: &str = "typed_env";
