//! Validation error types produced by schemas.
//!
//! Responsibilities:
//! - Describe every way a merged environment mapping can fail a schema.
//! - Render a single human-readable message listing all issues.
//!
//! Invariants:
//! - A `ValidationError` always carries at least one issue.
//! - Issue messages never include the offending raw value, only the key and rule.

use std::fmt;
use thiserror::Error;

/// Machine-readable category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    /// A required key was absent and had no default.
    Required,
    /// The value could not be read as the declared kind.
    InvalidType,
    /// The value is below a declared lower bound.
    TooSmall,
    /// The value is above a declared upper bound.
    TooBig,
    /// The value is not one of the allowed variants.
    InvalidEnumValue,
    /// Any rule reported by a caller-provided schema.
    Custom,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::Required => "required",
            IssueCode::InvalidType => "invalid_type",
            IssueCode::TooSmall => "too_small",
            IssueCode::TooBig => "too_big",
            IssueCode::InvalidEnumValue => "invalid_enum_value",
            IssueCode::Custom => "custom",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule for a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    pub fn new(key: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.key, self.message, self.code)
    }
}

/// Failure of a schema to accept a merged environment mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{}]", format_issues(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Build an error from collected issues.
    ///
    /// Returns `None` when `issues` is empty, since an empty failure is not a failure.
    pub fn from_issues(issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// Convenience constructor for schemas that report one custom rule.
    pub fn custom(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(key, IssueCode::Custom, message)],
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Keys that failed validation, in reporting order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.key.as_str())
    }
}
