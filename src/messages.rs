//! Diagnostic strings.
//!
//! Every human-readable message the engine and the constraint library emit is
//! built here so the wording stays consistent across the crate.

use crate::constraints::ValueType;
use serde_json::Value;

const PREVIEW_LIMIT: usize = 60;

/// JSON kind name of a value, as shown to users.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Short JSON rendering of a value for inclusion in a message.
pub(crate) fn preview(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= PREVIEW_LIMIT {
        return text;
    }
    let mut truncated: String = text.chars().take(PREVIEW_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}

fn format_bound(bound: f64) -> String {
    format!("{}", bound)
}

fn format_range((lower, upper): (f64, f64)) -> String {
    format!("[{}, {}]", format_bound(lower), format_bound(upper))
}

pub(crate) fn missing_required(field: &str, explanation: &str) -> String {
    format!("Missing required token \"{}\". {}", field, explanation)
}

pub(crate) fn empty_value(field: &str) -> String {
    format!("Value of token \"{}\" is null or empty.", field)
}

pub(crate) fn empty_required(field: &str, explanation: &str) -> String {
    format!("{} {}", empty_value(field), explanation)
}

pub(crate) fn rejected(field: &str, explanation: &str) -> String {
    format!("Token \"{}\" failed validation. {}", field, explanation)
}

pub(crate) fn incorrect_type(field: &str, value: &Value, expected: ValueType) -> String {
    format!(
        "Token \"{}\" has incorrect type, expected {} but found {} {}.",
        field,
        expected,
        kind_name(value),
        preview(value)
    )
}

pub(crate) fn not_in_enumeration(field: &str, value: &str, allowed: &[String]) -> String {
    format!(
        "Token \"{}\" value \"{}\" is not one of the allowed values [{}].",
        field,
        value,
        allowed.join(", ")
    )
}

pub(crate) fn pattern_mismatch(field: &str, value: &str, patterns: &[String]) -> String {
    let quoted: Vec<String> = patterns.iter().map(|p| format!("'{}'", p)).collect();
    format!(
        "Token \"{}\" value \"{}\" does not fully match any of the patterns [{}].",
        field,
        value,
        quoted.join(", ")
    )
}

pub(crate) fn below_minimum(field: &str, value: &Value, minimum: f64) -> String {
    format!(
        "Token \"{}\" value {} is less than the minimum {}.",
        field,
        preview(value),
        format_bound(minimum)
    )
}

pub(crate) fn out_of_range(field: &str, value: &Value, ranges: &[(f64, f64)]) -> String {
    let rendered: Vec<String> = ranges.iter().copied().map(format_range).collect();
    let noun = if ranges.len() == 1 {
        "the range"
    } else {
        "any of the ranges"
    };
    format!(
        "Token \"{}\" value {} is not within {} {}.",
        field,
        preview(value),
        noun,
        rendered.join(", ")
    )
}

pub(crate) fn count_below(field: &str, noun: &str, count: usize, minimum: usize) -> String {
    format!(
        "Token \"{}\" has {} {}, expected at least {}.",
        field, count, noun, minimum
    )
}

pub(crate) fn count_out_of_range(
    field: &str,
    noun: &str,
    count: usize,
    minimum: usize,
    maximum: usize,
) -> String {
    format!(
        "Token \"{}\" has {} {}, expected between {} and {}.",
        field, count, noun, minimum, maximum
    )
}

pub(crate) fn unrecognized(key: &str) -> String {
    format!("Unrecognized token \"{}\".", key)
}

pub(crate) fn exclusive_conflict(present: &[&str]) -> String {
    let quoted: Vec<String> = present.iter().map(|name| format!("\"{}\"", name)).collect();
    format!(
        "Tokens {} are mutually exclusive; at most one of them may be present.",
        quoted.join(", ")
    )
}

pub(crate) fn nested(field: &str, message: &str) -> String {
    format!("Value of token {} failed: {}", field, message)
}

pub(crate) fn summary(kind: &str, name: &str) -> String {
    format!("Validation for {} {} failed.", kind, name)
}

pub(crate) fn not_an_object(value: &Value) -> String {
    format!(
        "Document must be an object, found {} {}.",
        kind_name(value),
        preview(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_truncates_long_values() {
        let long = Value::String("x".repeat(200));
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_LIMIT);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_preview_quotes_strings() {
        assert_eq!(preview(&json!("eight")), "\"eight\"");
        assert_eq!(preview(&json!(9.5)), "9.5");
    }

    #[test]
    fn test_out_of_range_names_every_range() {
        let msg = out_of_range("MarketValue", &json!(7), &[(0.0, 5.0), (10.0, 15.0)]);
        assert_eq!(
            msg,
            "Token \"MarketValue\" value 7 is not within any of the ranges [0, 5], [10, 15]."
        );
    }

    #[test]
    fn test_single_range_wording() {
        let msg = out_of_range("Weight", &json!(9.5), &[(0.0, 5.5)]);
        assert!(msg.contains("not within the range [0, 5.5]"));
    }

    #[test]
    fn test_enumeration_lists_allowed_values() {
        let allowed = vec!["Grape".to_string(), "Orange".to_string()];
        let msg = not_in_enumeration("Fruit", "Kiwi", &allowed);
        assert!(msg.contains("[Grape, Orange]"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&json!(null)), "null");
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
    }
}
