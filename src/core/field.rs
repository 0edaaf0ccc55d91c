//! Field descriptors.

use crate::constraints::Constraint;
use crate::core::Diagnostics;
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named field of a schema level.
///
/// A descriptor carries the field name, the explanation shown to users (in
/// diagnostics and in generated templates), an optional default, and the
/// predicate that judges a present value. Two descriptors with the same name
/// are the same field: equality and hashing look at the name only.
///
/// # Examples
///
/// ```rust
/// use confguard::constraints::{Check, at_least};
/// use confguard::core::FieldDescriptor;
///
/// # fn main() -> confguard::error::Result<()> {
/// let consumed = FieldDescriptor::new(
///     "NumberConsumed",
///     "How many were eaten, a whole number of at least zero.",
///     Check::integer().with(at_least(0.0)?),
/// )
/// .with_default(0);
///
/// assert_eq!(consumed.name(), "NumberConsumed");
/// assert_eq!(consumed.default(), Some(&serde_json::json!(0)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FieldDescriptor {
    name: String,
    explanation: String,
    default: Option<Value>,
    predicate: Arc<dyn Constraint>,
}

impl FieldDescriptor {
    /// Create a descriptor without a default.
    pub fn new(
        name: impl Into<String>,
        explanation: impl Into<String>,
        predicate: impl Constraint + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            explanation: explanation.into(),
            default: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Set the value injected when the field is optional and absent.
    ///
    /// Defaults are ignored for required fields.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The key this field is looked up under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text for this field.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// The configured default, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Judge a present value.
    ///
    /// Presence and defaulting are the schema's concern; this only runs the
    /// predicate, which reports its own diagnosis on failure.
    pub fn validate(&self, value: &mut Value, diagnostics: &mut Diagnostics) -> bool {
        self.predicate.check(value, &self.name, diagnostics)
    }
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FieldDescriptor {}

impl Hash for FieldDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("explanation", &self.explanation)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
