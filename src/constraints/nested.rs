//! Constraints that descend into arrays and objects.

use super::Constraint;
use super::typed::{Check, ValueType};
use crate::core::{Diagnostics, Schema};
use crate::messages;
use serde_json::Value;
use std::sync::Arc;

/// Per-element constraint built by [`each`].
#[derive(Debug, Clone)]
pub struct Each {
    check: Check,
}

/// Apply `check` to every element of an array.
///
/// Elements are reported as `field[index]`. Every element is checked, so each
/// bad element gets its own diagnosis; one failure fails the whole array.
///
/// ```rust
/// use confguard::constraints::{Check, between, each, items_between};
///
/// # fn main() -> confguard::error::Result<()> {
/// let weights = Check::array()
///     .with(items_between(1, 4)?)
///     .with(each(Check::number().with(between(0.0, 5.5)?)));
/// # Ok(())
/// # }
/// ```
pub fn each(check: Check) -> Each {
    Each { check }
}

impl Constraint for Each {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        match value {
            Value::Array(items) => {
                let mut valid = true;
                for (index, item) in items.iter_mut().enumerate() {
                    let element = format!("{}[{}]", field, index);
                    valid &= self.check.check(item, &element, diagnostics);
                }
                valid
            }
            other => {
                diagnostics.report(messages::incorrect_type(field, other, ValueType::Array));
                false
            }
        }
    }
}

/// Sub-schema constraint built by [`object`].
#[derive(Debug, Clone)]
pub struct NestedObject {
    schema: Arc<Schema>,
}

/// Validate an object value against a child schema.
///
/// The child's diagnostics join the same session, attributed to `field`
/// (`Value of token <field> failed: ...`), followed by a
/// `Validation for object <field> failed.` line when the child fails. Defaults
/// declared by the child are injected into the nested object.
///
/// ```rust
/// use confguard::constraints::{Check, object, within};
/// use confguard::core::{FieldDescriptor, Schema};
///
/// # fn main() -> confguard::error::Result<()> {
/// let properties = Schema::builder()
///     .required(FieldDescriptor::new(
///         "MarketValue",
///         "Market value in dollars",
///         Check::number().with(within([(0.0, 5.0), (10.0, 15.0)])?),
///     ))
///     .build()?;
///
/// let field = FieldDescriptor::new(
///     "FruitProperties",
///     "Properties of the fruit",
///     Check::object().with(object(properties)),
/// );
/// # Ok(())
/// # }
/// ```
pub fn object(schema: impl Into<Arc<Schema>>) -> NestedObject {
    NestedObject {
        schema: schema.into(),
    }
}

impl Constraint for NestedObject {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        match value {
            Value::Object(map) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(field, keys = map.len(), "validating nested object");

                let valid = diagnostics.scoped(field, |scope| self.schema.check(map, scope, None));
                if !valid {
                    diagnostics.report(messages::summary(ValueType::Object.as_str(), field));
                }
                valid
            }
            other => {
                diagnostics.report(messages::incorrect_type(field, other, ValueType::Object));
                false
            }
        }
    }
}
