//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test end-to-end loading against on-disk env files.
//! - Test file-load failures and their propagation.
//! - Test ambient precedence and key filtering.
//! - Test validation error wrapping.
//! - Test that diagnostics only appear when debug loading is requested.
//!
//! Invariants:
//! - Tests inject fixture ambient sources unless they exercise `ProcessEnv` itself.
//! - Tests touching process-global state (cwd/env) use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::schema::{EnvMap, Field, ObjectSchema};

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `<temp>/.env` and return the directory with the file path.
pub fn env_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(".env");
    fs::write(&path, contents).expect("Failed to write env file");
    (dir, path)
}

pub fn ambient(pairs: &[(&str, &str)]) -> EnvMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn postgres_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("PG_HOST", Field::string())
        .field(
            "PG_PORT",
            Field::number().coerce().gte(1024).lte(65535).default(5432),
        )
}

pub fn mailer_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("MAIL_FROM", Field::string())
        .field("MAIL_DOMAIN", Field::string())
        .field("MAIL_API_KEY", Field::string())
}

pub const FULL_ENV: &str = "\
PG_HOST=localhost
PG_PORT=6000
MAIL_FROM=noreply@example.com
MAIL_DOMAIN=mg.example.com
MAIL_API_KEY=key-123
";
