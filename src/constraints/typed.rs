//! Type interpretation and constraint composition.

use super::Constraint;
use crate::core::Diagnostics;
use crate::messages;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The type a field value must be interpretable as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A JSON string
    String,
    /// Any JSON number
    Number,
    /// A JSON number without a fractional part (`3` and `3.0`, not `3.5`)
    Integer,
    /// `true` or `false`
    Boolean,
    /// A JSON object
    Object,
    /// A JSON array
    Array,
}

impl ValueType {
    /// Whether `value` can be interpreted as this type.
    ///
    /// Interpretation is strict: strings are never coerced to numbers or
    /// booleans.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0)
            }
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }

    /// Lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a value counts as absent: `null`, `""`, `[]` or `{}`.
///
/// `0` and `false` are values, not emptiness.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// A typed field predicate: interpret the value as a [`ValueType`], then
/// apply every attached constraint.
///
/// Evaluation order:
/// 1. an empty value (see [`is_empty`]) fails with a "null or empty" diagnosis;
/// 2. a value of the wrong type fails with an "incorrect type" diagnosis and
///    no constraint runs;
/// 3. otherwise every constraint runs, even after one fails, and the check
///    passes only if all of them pass.
///
/// # Examples
///
/// ```rust
/// use confguard::constraints::{Check, at_least};
/// use confguard::core::Diagnostics;
/// use confguard::constraints::Constraint;
/// use serde_json::json;
///
/// # fn main() -> confguard::error::Result<()> {
/// let check = Check::integer().with(at_least(0.0)?);
/// let mut diagnostics = Diagnostics::new();
///
/// assert!(check.check(&mut json!(3), "Count", &mut diagnostics));
/// assert!(!check.check(&mut json!("bleventeen"), "Count", &mut diagnostics));
/// assert_eq!(diagnostics.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Check {
    kind: ValueType,
    constraints: Vec<Arc<dyn Constraint>>,
}

impl Check {
    /// A check for `kind` with no further constraints.
    pub fn new(kind: ValueType) -> Self {
        Self {
            kind,
            constraints: Vec::new(),
        }
    }

    /// Shorthand for `Check::new(ValueType::String)`.
    pub fn string() -> Self {
        Self::new(ValueType::String)
    }

    /// Shorthand for `Check::new(ValueType::Number)`.
    pub fn number() -> Self {
        Self::new(ValueType::Number)
    }

    /// Shorthand for `Check::new(ValueType::Integer)`.
    pub fn integer() -> Self {
        Self::new(ValueType::Integer)
    }

    /// Shorthand for `Check::new(ValueType::Boolean)`.
    pub fn boolean() -> Self {
        Self::new(ValueType::Boolean)
    }

    /// Shorthand for `Check::new(ValueType::Object)`.
    pub fn object() -> Self {
        Self::new(ValueType::Object)
    }

    /// Shorthand for `Check::new(ValueType::Array)`.
    pub fn array() -> Self {
        Self::new(ValueType::Array)
    }

    /// Append a constraint to run after the type interpretation succeeds.
    pub fn with(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// The type this check interprets values as.
    pub fn kind(&self) -> ValueType {
        self.kind
    }
}

impl Constraint for Check {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        if is_empty(value) {
            diagnostics.report(messages::empty_value(field));
            return false;
        }

        if !self.kind.accepts(value) {
            diagnostics.report(messages::incorrect_type(field, value, self.kind));
            return false;
        }

        let mut valid = true;
        for constraint in &self.constraints {
            valid &= constraint.check(value, field, diagnostics);
        }
        valid
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("kind", &self.kind)
            .field("constraints", &self.constraints.len())
            .finish()
    }
}
