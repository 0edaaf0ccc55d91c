//! Constraints over a value's string form.

use super::Constraint;
use crate::core::Diagnostics;
use crate::error::{Result, SchemaError};
use crate::messages;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

/// The text a value is compared as: a string's contents, otherwise its JSON.
fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Enumeration constraint built by [`one_of`].
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<String>,
}

/// The value's string form must equal one of `allowed`.
///
/// ```rust
/// use confguard::constraints::{Check, one_of};
///
/// let fruit = Check::string().with(one_of(["Grape", "Orange", "Apple"]));
/// ```
pub fn one_of<I, S>(allowed: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }
}

impl Constraint for OneOf {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        let text = string_form(value);
        if self.allowed.iter().any(|allowed| allowed.as_str() == &*text) {
            return true;
        }
        diagnostics.report(messages::not_in_enumeration(field, &text, &self.allowed));
        false
    }
}

/// Exact-match regex constraint built by [`matches`].
#[derive(Debug, Clone)]
pub struct Pattern {
    sources: Vec<String>,
    compiled: Vec<Regex>,
}

/// The value's string form must be entirely accounted for by at least one of
/// `patterns`.
///
/// A pattern accounts for a string when deleting every one of its matches
/// leaves nothing behind, so `[a-z]+` accepts `"abc"` but not `"abc1"`, and
/// `ab` accepts `"abab"`.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidPattern`] if any pattern fails to compile,
/// and [`SchemaError::InvalidBounds`] if `patterns` is empty.
///
/// ```rust
/// use confguard::constraints::{Check, matches};
///
/// # fn main() -> confguard::error::Result<()> {
/// let color = Check::string().with(matches(["#[0-9a-fA-F]{6}"])?);
/// assert!(matches(["("]).is_err());
/// # Ok(())
/// # }
/// ```
pub fn matches<I, S>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let sources: Vec<String> = patterns.into_iter().map(Into::into).collect();
    if sources.is_empty() {
        return Err(SchemaError::InvalidBounds(
            "a pattern constraint needs at least one pattern".to_string(),
        ));
    }

    let compiled = sources
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Pattern { sources, compiled })
}

impl Constraint for Pattern {
    fn check(&self, value: &mut Value, field: &str, diagnostics: &mut Diagnostics) -> bool {
        let text = string_form(value);
        if self
            .compiled
            .iter()
            .any(|regex| regex.replace_all(&text, "").is_empty())
        {
            return true;
        }
        diagnostics.report(messages::pattern_mismatch(field, &text, &self.sources));
        false
    }
}
