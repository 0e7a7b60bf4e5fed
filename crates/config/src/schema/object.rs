//! Object schema: a named set of fields validated as one unit.
//!
//! Responsibilities:
//! - Hold declared fields in declaration order.
//! - Validate a merged environment mapping, collecting every failed field.
//! - Produce a `ConfigObject` restricted to declared keys.
//!
//! Invariants:
//! - Keys in the mapping that are not declared never reach the output.
//! - Issues are reported in declaration order.
//! - Re-declaring a key replaces the earlier declaration in place.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ValidationError;
use super::field::Field;
use super::typed::Typed;
use super::{EnvMap, Schema};

/// Shaped output of an `ObjectSchema`.
pub type ConfigObject = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    fields: Vec<(String, Field)>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field.
    pub fn field(mut self, key: impl Into<String>, field: impl Into<Field>) -> Self {
        let key = key.into();
        let field = field.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((key, field)),
        }
        self
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, field)| field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Deserialize the shaped object into `T` after validation.
    pub fn typed<T: DeserializeOwned>(self) -> Typed<T> {
        Typed::new(self)
    }
}

impl Schema for ObjectSchema {
    type Output = ConfigObject;

    fn validate(&self, env: &EnvMap) -> Result<ConfigObject, ValidationError> {
        let mut shaped = Map::new();
        let mut issues = Vec::new();

        for (key, field) in &self.fields {
            match field.check(key, env.get(key).map(String::as_str)) {
                Ok(Some(value)) => {
                    shaped.insert(key.clone(), value);
                }
                Ok(None) => {}
                Err(issue) => issues.push(issue),
            }
        }

        match ValidationError::from_issues(issues) {
            Some(err) => Err(err),
            None => Ok(shaped),
        }
    }
}
