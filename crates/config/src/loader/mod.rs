//! Environment loader: env file + ambient environment + schema.
//!
//! Responsibilities:
//! - Read a `KEY=VALUE` env file without touching the process environment.
//! - Overlay the ambient environment and validate the result against a `Schema`.
//! - Report validation failures with the env file path that was loaded.
//!
//! Does NOT handle:
//! - Multiple files, profiles, or reload semantics.
//! - Defining field types and constraints (see `crate::schema`).
//!
//! Invariants / Assumptions:
//! - Ambient environment variables take precedence over env file values.
//! - A missing or malformed env file is always fatal; there is no empty fallback.

mod builder;
mod dotenv;
mod env;
mod error;
mod options;

pub use builder::{EnvLoader, load_env};
pub use dotenv::read_env_file;
pub use env::{EnvSource, ProcessEnv, overlay};
pub use error::LoadEnvError;
pub use options::LoadOptions;

#[cfg(test)]
mod tests;
