//! Tests for validation failure wrapping.
//!
//! Responsibilities:
//! - Test that validation failures name the effective env file path.
//! - Test that the underlying issues are preserved in message and source.

use std::error::Error as _;

use super::{env_file, mailer_schema, postgres_schema};
use crate::loader::builder::EnvLoader;
use crate::loader::error::LoadEnvError;
use crate::schema::{EnvMap, IssueCode};

#[test]
fn test_out_of_range_port_names_file_and_bound() {
    let (_dir, path) = env_file("PG_HOST=localhost\nPG_PORT=70000\n");

    let err = EnvLoader::new()
        .with_ambient(EnvMap::new())
        .with_path(&path)
        .load(&postgres_schema())
        .unwrap_err();

    let message = err.to_string();
    assert!(
        message.starts_with("Invalid configuration loaded. Check these values in your "),
        "unexpected message: {}",
        message
    );
    assert!(message.contains(&path.display().to_string()), "{}", message);
    assert!(message.contains("PG_PORT"), "{}", message);
    assert!(message.contains("less than or equal to 65535"), "{}", message);
}

#[test]
fn test_missing_required_field_names_file() {
    let (_dir, path) = env_file("PG_HOST=localhost\n");

    let err = EnvLoader::new()
        .with_ambient(EnvMap::new())
        .with_path(&path)
        .load(&mailer_schema())
        .unwrap_err();

    match &err {
        LoadEnvError::Validation { path: reported, source } => {
            assert_eq!(reported, &path);
            let keys: Vec<_> = source.keys().collect();
            assert_eq!(keys, vec!["MAIL_FROM", "MAIL_DOMAIN", "MAIL_API_KEY"]);
            assert!(source.issues().iter().all(|i| i.code == IssueCode::Required));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_validation_error_exposes_source() {
    let (_dir, path) = env_file("PG_PORT=not-a-port\n");

    let err = EnvLoader::new()
        .with_ambient(EnvMap::new())
        .with_path(&path)
        .load(&postgres_schema())
        .unwrap_err();

    let source = err.source().expect("Validation error should expose its source");
    assert!(source.to_string().contains("PG_PORT"));
    assert_eq!(err.validation_issues().len(), 2);
}

#[test]
fn test_error_message_does_not_include_values() {
    let secret = "supersecret_value_12345";
    let (_dir, path) = env_file(&format!("PG_HOST=localhost\nPG_PORT={}\n", secret));

    let err = EnvLoader::new()
        .with_ambient(EnvMap::new())
        .with_path(&path)
        .load(&postgres_schema())
        .unwrap_err();

    assert!(
        !err.to_string().contains(secret),
        "Error message should NOT contain the raw value: {}",
        err
    );
}
