//! Typed environment configuration.
//!
//! This crate loads a `KEY=VALUE` env file, overlays the process environment,
//! and validates the merged values against a caller-supplied schema, returning
//! only the fields the schema declares.
//!
//! ```no_run
//! use typed_env_config::{Field, LoadOptions, ObjectSchema, load_env};
//!
//! let postgres = ObjectSchema::new()
//!     .field("PG_HOST", Field::string())
//!     .field("PG_PORT", Field::number().coerce().gte(1024).lte(65535).default(5432));
//!
//! let config = load_env(&postgres, Some(LoadOptions::new().with_path("./demo/.env")))?;
//! println!("{}", config["PG_PORT"]);
//! # Ok::<(), typed_env_config::LoadEnvError>(())
//! ```

pub mod constants;
mod loader;
pub mod schema;

/// Errors raised by the env file parser, re-exported for matching on `LoadEnvError::FileLoad`.
pub use dotenvy::Error as DotenvError;
pub use loader::{
    EnvLoader, EnvSource, LoadEnvError, LoadOptions, ProcessEnv, load_env, overlay, read_env_file,
};
pub use schema::{
    ConfigObject, EnvMap, Field, Issue, IssueCode, ObjectSchema, Schema, Typed, ValidationError,
};
