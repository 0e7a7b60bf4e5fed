//! Schemas that validate and shape a merged environment mapping.
//!
//! Responsibilities:
//! - Define the `Schema` seam the loader depends on.
//! - Provide a built-in declarative engine (`ObjectSchema` + `Field`) and a typed adapter.
//!
//! Does NOT handle:
//! - Reading env files or the process environment (see `loader`).
//!
//! Invariants:
//! - A schema never mutates its input mapping.
//! - Output contains only what the schema declares.

mod error;
mod field;
mod object;
mod typed;

use std::collections::BTreeMap;

pub use error::{Issue, IssueCode, ValidationError};
pub use field::{BooleanField, EnumField, Field, NumberField, StringField};
pub use object::{ConfigObject, ObjectSchema};
pub use typed::Typed;

/// Flat mapping of environment variable names to raw string values.
pub type EnvMap = BTreeMap<String, String>;

/// Validate-and-shape capability over a merged environment mapping.
pub trait Schema {
    type Output;

    fn validate(&self, env: &EnvMap) -> Result<Self::Output, ValidationError>;
}

/// Plain functions and closures act as schemas.
impl<F, O> Schema for F
where
    F: Fn(&EnvMap) -> Result<O, ValidationError>,
{
    type Output = O;

    fn validate(&self, env: &EnvMap) -> Result<O, ValidationError> {
        self(env)
    }
}
