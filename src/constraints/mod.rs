//! Composable value constraints.
//!
//! A constraint judges one value on behalf of a named field. It records its
//! own diagnosis in the session's [`Diagnostics`] and returns `false` on
//! failure; it never panics or errors on bad input. Constraints that need
//! valid parameters (patterns, bounds) validate them when they are built and
//! return a [`SchemaError`](crate::error::SchemaError) instead.
//!
//! Field predicates are usually a [`Check`]: a type interpretation followed
//! by any number of constraints, all of which run so that every violation is
//! reported.
//!
//! ```rust
//! use confguard::constraints::{Check, between, one_of};
//!
//! # fn main() -> confguard::error::Result<()> {
//! let fruit = Check::string().with(one_of(["Grape", "Orange", "Apple"]));
//! let weight = Check::number().with(between(0.0, 5.5)?);
//! # Ok(())
//! # }
//! ```

mod count;
mod nested;
mod numeric;
mod text;
mod typed;

pub use count::{
    ItemCount, PropertyCount, items_at_least, items_between, properties_at_least,
    properties_between,
};
pub use nested::{Each, NestedObject, each, object};
pub use numeric::{Bounds, at_least, between, within};
pub use text::{OneOf, Pattern, matches, one_of};
pub use typed::{Check, ValueType, is_empty};

use crate::core::Diagnostics;
use serde_json::Value;

/// A predicate over a field value.
///
/// `value` is mutable so that nested-object constraints can fill in defaults
/// inside sub-documents; ordinary constraints only read it.
///
/// Any closure taking `(&Value, &str, &mut Diagnostics)` and returning `bool`
/// is a constraint:
///
/// ```rust
/// use confguard::constraints::Check;
/// use confguard::core::Diagnostics;
/// use serde_json::Value;
///
/// let even = Check::integer().with(|value: &Value, field: &str, diagnostics: &mut Diagnostics| {
///     let ok = value.as_i64().is_some_and(|n| n % 2 == 0);
///     if !ok {
///         diagnostics.report(format!("Token \"{}\" must be even.", field));
///     }
///     ok
/// });
/// ```
pub trait Constraint: Send + Sync {
    /// Judge `value`, reporting any violation against `field`.
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool;
}

impl<F> Constraint for F
where
    F: Fn(&Value, &str, &mut Diagnostics) -> bool + Send + Sync,
{
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        self(&*value, field, diagnostics)
    }
}
