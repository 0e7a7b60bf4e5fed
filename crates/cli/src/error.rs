//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `LoadEnvError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.

use typed_env_config::LoadEnvError;

/// Structured exit codes for typed-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Env file error - missing, unreadable, or malformed.
    ///
    /// Scripts should check the `--env-file` path.
    EnvFileError = 3,

    /// Validation error - a value is missing or violates its schema.
    ///
    /// Scripts should fix the env file or environment and not retry as-is.
    ValidationError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadEnvError> for ExitCode {
    fn from(error: &LoadEnvError) -> Self {
        match error {
            LoadEnvError::FileLoad(_) => ExitCode::EnvFileError,
            LoadEnvError::Validation { .. } => ExitCode::ValidationError,
        }
    }
}

/// Extension trait to pick an exit code for a top-level `anyhow::Error`.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoadEnvError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
