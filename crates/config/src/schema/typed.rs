//! Strongly-typed view over an `ObjectSchema`.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ValidationError;
use super::object::ObjectSchema;
use super::{EnvMap, Schema};

/// Validates with an `ObjectSchema`, then deserializes the shaped object into `T`.
///
/// A deserialization failure means `T` and the schema disagree (for example a
/// port declared as any number in the schema but `u8` in `T`). It is reported
/// as a custom issue keyed by the failing env key. Failures on a key never
/// echo the value; failures on the object itself (such as a field `T` needs
/// but the schema omitted) are keyed by the type name and keep serde's message,
/// which only names keys.
pub struct Typed<T> {
    schema: ObjectSchema,
    _target: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    pub fn new(schema: ObjectSchema) -> Self {
        Self {
            schema,
            _target: PhantomData,
        }
    }

    pub fn schema(&self) -> &ObjectSchema {
        &self.schema
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        Self::new(self.schema.clone())
    }
}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("target", &type_name::<T>())
            .field("schema", &self.schema)
            .finish()
    }
}

impl<T: DeserializeOwned> Schema for Typed<T> {
    type Output = T;

    fn validate(&self, env: &EnvMap) -> Result<T, ValidationError> {
        let shaped = self.schema.validate(env)?;
        serde_path_to_error::deserialize(Value::Object(shaped)).map_err(|e| {
            let path = e.path();
            if path.iter().next().is_none() {
                ValidationError::custom(type_name::<T>(), e.into_inner().to_string())
            } else {
                ValidationError::custom(
                    path.to_string(),
                    format!("does not fit target type {}", type_name::<T>()),
                )
            }
        })
    }
}
