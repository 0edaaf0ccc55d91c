//! Size bounds on objects and arrays.

use super::Constraint;
use super::typed::ValueType;
use crate::core::Diagnostics;
use crate::error::{Result, SchemaError};
use crate::messages;
use serde_json::Value;

/// Inclusive count limits shared by property and item bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Limits {
    minimum: usize,
    maximum: Option<usize>,
}

impl Limits {
    fn new(minimum: usize, maximum: usize) -> Result<Self> {
        if minimum > maximum {
            return Err(SchemaError::InvalidBounds(format!(
                "count range [{}, {}] is invalid",
                minimum, maximum
            )));
        }
        Ok(Self {
            minimum,
            maximum: Some(maximum),
        })
    }

    fn at_least(minimum: usize) -> Self {
        Self {
            minimum,
            maximum: None,
        }
    }

    fn judge(&self, count: usize, field: &str, noun: &str, diagnostics: &mut Diagnostics) -> bool {
        let within = count >= self.minimum && self.maximum.is_none_or(|max| count <= max);
        if !within {
            let message = match self.maximum {
                Some(maximum) => {
                    messages::count_out_of_range(field, noun, count, self.minimum, maximum)
                }
                None => messages::count_below(field, noun, count, self.minimum),
            };
            diagnostics.report(message);
        }
        within
    }
}

/// Object key-count constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyCount(Limits);

/// The object must have at least `minimum` keys.
pub fn properties_at_least(minimum: usize) -> PropertyCount {
    PropertyCount(Limits::at_least(minimum))
}

/// The object must have between `minimum` and `maximum` keys, inclusive.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidBounds`] if `minimum > maximum`.
pub fn properties_between(minimum: usize, maximum: usize) -> Result<PropertyCount> {
    Limits::new(minimum, maximum).map(PropertyCount)
}

impl Constraint for PropertyCount {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        match value.as_object() {
            Some(map) => self.0.judge(map.len(), field, "properties", diagnostics),
            None => {
                diagnostics.report(messages::incorrect_type(field, value, ValueType::Object));
                false
            }
        }
    }
}

/// Array length constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCount(Limits);

/// The array must have at least `minimum` elements.
pub fn items_at_least(minimum: usize) -> ItemCount {
    ItemCount(Limits::at_least(minimum))
}

/// The array must have between `minimum` and `maximum` elements, inclusive.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidBounds`] if `minimum > maximum`.
pub fn items_between(minimum: usize, maximum: usize) -> Result<ItemCount> {
    Limits::new(minimum, maximum).map(ItemCount)
}

impl Constraint for ItemCount {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        match value.as_array() {
            Some(items) => self.0.judge(items.len(), field, "elements", diagnostics),
            None => {
                diagnostics.report(messages::incorrect_type(field, value, ValueType::Array));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(constraint: &impl Constraint, mut value: Value) -> (bool, Vec<String>) {
        let mut diagnostics = Diagnostics::new();
        let verdict = constraint.check(&mut value, "Field", &mut diagnostics);
        (verdict, diagnostics.into_errors())
    }

    #[test]
    fn test_items_between() {
        let bounds = items_between(1, 4).unwrap();
        assert!(run(&bounds, json!([1])).0);
        assert!(run(&bounds, json!([1, 2, 3, 4])).0);

        let (verdict, errors) = run(&bounds, json!([1, 2, 3, 4, 5, 6, 7]));
        assert!(!verdict);
        assert_eq!(
            errors,
            vec!["Token \"Field\" has 7 elements, expected between 1 and 4."]
        );
    }

    #[test]
    fn test_items_at_least() {
        let bounds = items_at_least(2);
        assert!(run(&bounds, json!([1, 2])).0);

        let (verdict, errors) = run(&bounds, json!([1]));
        assert!(!verdict);
        assert_eq!(
            errors,
            vec!["Token \"Field\" has 1 elements, expected at least 2."]
        );
    }

    #[test]
    fn test_properties_between() {
        let bounds = properties_between(1, 2).unwrap();
        assert!(run(&bounds, json!({"a": 1})).0);
        assert!(!run(&bounds, json!({"a": 1, "b": 2, "c": 3})).0);
    }

    #[test]
    fn test_properties_at_least() {
        let bounds = properties_at_least(2);
        assert!(run(&bounds, json!({"a": 1, "b": 2})).0);

        let (verdict, errors) = run(&bounds, json!({"a": 1}));
        assert!(!verdict);
        assert!(errors[0].contains("has 1 properties"));
    }

    #[test]
    fn test_wrong_container_is_type_error() {
        let (verdict, errors) = run(&items_at_least(0), json!({"a": 1}));
        assert!(!verdict);
        assert!(errors[0].contains("expected array"));

        let (verdict, errors) = run(&properties_at_least(0), json!([1]));
        assert!(!verdict);
        assert!(errors[0].contains("expected object"));
    }

    #[test]
    fn test_inverted_counts_rejected() {
        assert!(items_between(5, 1).is_err());
        assert!(properties_between(3, 2).is_err());
    }
}
