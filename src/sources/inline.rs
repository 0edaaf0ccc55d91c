//! In-memory document source.

use super::{DocumentSource, Format};
use crate::error::Result;
use serde_json::Value;

/// A document held as text, such as an embedded default configuration.
///
/// # Examples
///
/// ```rust
/// use confguard::sources::{DocumentSource, Format, InlineSource};
///
/// let source = InlineSource::new("defaults", Format::Json, r#"{"Fruit": "Apple"}"#);
/// assert_eq!(source.load().unwrap()["Fruit"], "Apple");
/// ```
pub struct InlineSource {
    name: String,
    format: Format,
    text: String,
}

impl InlineSource {
    /// Create a source named `name` holding `text` in `format`.
    pub fn new(name: impl Into<String>, format: Format, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format,
            text: text.into(),
        }
    }
}

impl DocumentSource for InlineSource {
    fn load(&self) -> Result<Value> {
        self.format.parse(&self.text)
    }

    fn name(&self) -> String {
        format!("inline:{}", self.name)
    }
}
