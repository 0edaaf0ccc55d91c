//! Inclusive numeric bounds.

use super::Constraint;
use super::typed::ValueType;
use crate::core::Diagnostics;
use crate::error::{Result, SchemaError};
use crate::messages;
use serde_json::Value;

/// Numeric constraint built by [`at_least`], [`between`] or [`within`].
#[derive(Debug, Clone, PartialEq)]
pub enum Bounds {
    /// `value >= minimum`
    AtLeast(f64),
    /// `value` lies in at least one inclusive `(lower, upper)` range
    Ranges(Vec<(f64, f64)>),
}

/// The value must be at least `minimum` (inclusive).
///
/// # Errors
///
/// Returns [`SchemaError::InvalidBounds`] if `minimum` is NaN.
pub fn at_least(minimum: f64) -> Result<Bounds> {
    if minimum.is_nan() {
        return Err(SchemaError::InvalidBounds("minimum NaN is invalid".to_string()));
    }
    Ok(Bounds::AtLeast(minimum))
}

/// The value must lie in `[lower, upper]`.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidBounds`] if `lower > upper` or either bound
/// is NaN.
pub fn between(lower: f64, upper: f64) -> Result<Bounds> {
    within([(lower, upper)])
}

/// The value must lie in at least one of the inclusive `ranges`.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidBounds`] if `ranges` is empty or any range
/// is inverted or contains NaN.
///
/// ```rust
/// use confguard::constraints::{Check, within};
///
/// # fn main() -> confguard::error::Result<()> {
/// let market_value = Check::number().with(within([(0.0, 5.0), (10.0, 15.0)])?);
/// assert!(within([(5.0, 1.0)]).is_err());
/// # Ok(())
/// # }
/// ```
pub fn within<I>(ranges: I) -> Result<Bounds>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let ranges: Vec<(f64, f64)> = ranges.into_iter().collect();
    if ranges.is_empty() {
        return Err(SchemaError::InvalidBounds(
            "at least one range is required".to_string(),
        ));
    }
    for &(lower, upper) in &ranges {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(SchemaError::InvalidBounds(format!(
                "range [{}, {}] is invalid",
                lower, upper
            )));
        }
    }
    Ok(Bounds::Ranges(ranges))
}

impl Bounds {
    fn contains(&self, n: f64) -> bool {
        match self {
            Self::AtLeast(minimum) => n >= *minimum,
            Self::Ranges(ranges) => ranges
                .iter()
                .any(|&(lower, upper)| lower <= n && n <= upper),
        }
    }
}

impl Constraint for Bounds {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        let Some(n) = value.as_f64() else {
            diagnostics.report(messages::incorrect_type(field, value, ValueType::Number));
            return false;
        };

        if self.contains(n) {
            return true;
        }

        let message = match self {
            Self::AtLeast(minimum) => messages::below_minimum(field, value, *minimum),
            Self::Ranges(ranges) => messages::out_of_range(field, value, ranges),
        };
        diagnostics.report(message);
        false
    }
}
