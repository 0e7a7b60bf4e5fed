//! Field declarations for the built-in object schema.
//!
//! Responsibilities:
//! - Provide kind-specific builders (`StringField`, `NumberField`, `BooleanField`, `EnumField`).
//! - Check a single raw environment value against the declared kind and constraints.
//!
//! Does NOT handle:
//! - Iterating over a mapping or collecting issues across keys (see object.rs).
//!
//! Invariants:
//! - Every field is required unless `optional()` or `default()` is applied.
//! - Defaults are emitted as given and are not re-validated.
//! - Numeric and boolean fields reject string input unless `coerce()` is applied.

use serde_json::{Number, Value};

use super::error::{Issue, IssueCode};

/// What happens when a declared key is absent from the merged mapping.
#[derive(Debug, Clone, PartialEq)]
enum Presence {
    Required,
    Optional,
    Default(Value),
}

/// Settings shared by every field kind.
#[derive(Debug, Clone, PartialEq)]
struct Common {
    presence: Presence,
    description: Option<String>,
}

impl Default for Common {
    fn default() -> Self {
        Self {
            presence: Presence::Required,
            description: None,
        }
    }
}

/// Generates the modifiers every field builder supports.
macro_rules! common_modifiers {
    ($builder:ty) => {
        impl $builder {
            /// Allow the key to be absent; it is then omitted from the output.
            pub fn optional(mut self) -> Self {
                self.common.presence = Presence::Optional;
                self
            }

            /// Value used when the key is absent.
            pub fn default(mut self, value: impl Into<Value>) -> Self {
                self.common.presence = Presence::Default(value.into());
                self
            }

            /// Human description, surfaced by `Field::description`.
            pub fn describe(mut self, text: impl Into<String>) -> Self {
                self.common.description = Some(text.into());
                self
            }
        }

        impl From<$builder> for Field {
            fn from(builder: $builder) -> Self {
                let (common, rule) = builder.into_parts();
                Field { common, rule }
            }
        }
    };
}

/// A declared field of any kind, ready to be placed in an `ObjectSchema`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    common: Common,
    rule: Rule,
}

#[derive(Debug, Clone, PartialEq)]
enum Rule {
    String(StringRule),
    Number(NumberRule),
    Boolean { coerce: bool },
    Enum(Vec<String>),
}

impl Field {
    pub fn string() -> StringField {
        Default::default()
    }

    pub fn number() -> NumberField {
        Default::default()
    }

    pub fn boolean() -> BooleanField {
        Default::default()
    }

    /// A string restricted to one of `variants`.
    pub fn enumeration<I, S>(variants: I) -> EnumField
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumField {
            common: Common::default(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.common.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.common.presence == Presence::Required
    }

    /// Check `raw` (the merged value for `key`, if any).
    ///
    /// `Ok(None)` means the key is absent and optional, so it must not appear in the output.
    pub(crate) fn check(&self, key: &str, raw: Option<&str>) -> Result<Option<Value>, Issue> {
        let Some(raw) = raw else {
            return match &self.common.presence {
                Presence::Required => Err(Issue::new(key, IssueCode::Required, "Required")),
                Presence::Optional => Ok(None),
                Presence::Default(value) => Ok(Some(value.clone())),
            };
        };

        let value = match &self.rule {
            Rule::String(rule) => rule.check(key, raw)?,
            Rule::Number(rule) => rule.check(key, raw)?,
            Rule::Boolean { coerce } => check_boolean(key, raw, *coerce)?,
            Rule::Enum(variants) => check_enum(key, raw, variants)?,
        };
        Ok(Some(value))
    }
}

// =============================================================================
// Strings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
struct StringRule {
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl StringRule {
    fn check(&self, key: &str, raw: &str) -> Result<Value, Issue> {
        let len = raw.chars().count();
        if let Some(min) = self.min_len
            && len < min
        {
            return Err(Issue::new(
                key,
                IssueCode::TooSmall,
                format!("String must contain at least {} character(s)", min),
            ));
        }
        if let Some(max) = self.max_len
            && len > max
        {
            return Err(Issue::new(
                key,
                IssueCode::TooBig,
                format!("String must contain at most {} character(s)", max),
            ));
        }
        Ok(Value::String(raw.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct StringField {
    common: Common,
    rule: StringRule,
}

impl StringField {
    pub fn min_len(mut self, len: usize) -> Self {
        self.rule.min_len = Some(len);
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.rule.max_len = Some(len);
        self
    }

    pub fn non_empty(self) -> Self {
        self.min_len(1)
    }

    fn into_parts(self) -> (Common, Rule) {
        (self.common, Rule::String(self.rule))
    }
}

common_modifiers!(StringField);

// =============================================================================
// Numbers
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
struct NumberRule {
    coerce: bool,
    int: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberRule {
    fn check(&self, key: &str, raw: &str) -> Result<Value, Issue> {
        if !self.coerce {
            return Err(Issue::new(
                key,
                IssueCode::InvalidType,
                "Expected number, received string",
            ));
        }

        let number = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| {
                Issue::new(key, IssueCode::InvalidType, "Expected number, received nan")
            })?;

        if self.int && number.fract() != 0.0 {
            return Err(Issue::new(
                key,
                IssueCode::InvalidType,
                "Expected integer, received float",
            ));
        }
        if let Some(min) = self.min
            && number < min
        {
            return Err(Issue::new(
                key,
                IssueCode::TooSmall,
                format!("Number must be greater than or equal to {}", min),
            ));
        }
        if let Some(max) = self.max
            && number > max
        {
            return Err(Issue::new(
                key,
                IssueCode::TooBig,
                format!("Number must be less than or equal to {}", max),
            ));
        }

        Ok(number_value(number))
    }
}

/// Integral values become JSON integers so they deserialize into integer fields.
fn number_value(number: f64) -> Value {
    if number.fract() == 0.0 && number >= i64::MIN as f64 && number < i64::MAX as f64 {
        Value::Number(Number::from(number as i64))
    } else {
        // Finite by construction, so from_f64 cannot fail; Null is unreachable.
        Number::from_f64(number).map_or(Value::Null, Value::Number)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberField {
    common: Common,
    rule: NumberRule,
}

impl NumberField {
    /// Parse string input as a number instead of rejecting it.
    pub fn coerce(mut self) -> Self {
        self.rule.coerce = true;
        self
    }

    /// Reject values with a fractional part.
    pub fn int(mut self) -> Self {
        self.rule.int = true;
        self
    }

    /// Inclusive lower bound.
    pub fn min(mut self, bound: impl Into<f64>) -> Self {
        self.rule.min = Some(bound.into());
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, bound: impl Into<f64>) -> Self {
        self.rule.max = Some(bound.into());
        self
    }

    pub fn gte(self, bound: impl Into<f64>) -> Self {
        self.min(bound)
    }

    pub fn lte(self, bound: impl Into<f64>) -> Self {
        self.max(bound)
    }

    fn into_parts(self) -> (Common, Rule) {
        (self.common, Rule::Number(self.rule))
    }
}

common_modifiers!(NumberField);

// =============================================================================
// Booleans
// =============================================================================

fn check_boolean(key: &str, raw: &str, coerce: bool) -> Result<Value, Issue> {
    if !coerce {
        return Err(Issue::new(
            key,
            IssueCode::InvalidType,
            "Expected boolean, received string",
        ));
    }
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
        "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
        _ => Err(Issue::new(
            key,
            IssueCode::InvalidType,
            "Expected boolean (true/false, 1/0, yes/no, on/off)",
        )),
    }
}

#[derive(Debug, Clone, Default)]
pub struct BooleanField {
    common: Common,
    coerce: bool,
}

impl BooleanField {
    /// Parse string input as a boolean instead of rejecting it.
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    fn into_parts(self) -> (Common, Rule) {
        (
            self.common,
            Rule::Boolean {
                coerce: self.coerce,
            },
        )
    }
}

common_modifiers!(BooleanField);

// =============================================================================
// Enumerations
// =============================================================================

fn check_enum(key: &str, raw: &str, variants: &[String]) -> Result<Value, Issue> {
    if variants.iter().any(|variant| variant == raw) {
        return Ok(Value::String(raw.to_string()));
    }
    let expected = variants
        .iter()
        .map(|variant| format!("'{}'", variant))
        .collect::<Vec<_>>()
        .join(" | ");
    Err(Issue::new(
        key,
        IssueCode::InvalidEnumValue,
        format!("Invalid enum value. Expected {}", expected),
    ))
}

#[derive(Debug, Clone)]
pub struct EnumField {
    common: Common,
    variants: Vec<String>,
}

impl EnumField {
    fn into_parts(self) -> (Common, Rule) {
        (self.common, Rule::Enum(self.variants))
    }
}

common_modifiers!(EnumField);
