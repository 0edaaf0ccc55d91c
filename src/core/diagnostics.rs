//! Validation session state and results.

use crate::error::ValidationError;
use crate::messages;
use serde::Serialize;
use serde_json::Value;

/// The ordered diagnostics of one validation session.
///
/// A session is threaded by reference through the whole validation call tree,
/// so nested objects and array elements append to the same list and messages
/// keep document order. Nested-object validation wraps its work in
/// [`scoped`](Self::scoped), which prefixes every message reported inside it
/// with the enclosing field name.
///
/// # Examples
///
/// ```rust
/// use confguard::core::Diagnostics;
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.scoped("Server", |d| d.report("Missing required token \"Port\"."));
///
/// assert_eq!(
///     diagnostics.errors(),
///     ["Value of token Server failed: Missing required token \"Port\"."]
/// );
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<String>,
    scopes: Vec<String>,
}

impl Diagnostics {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, attributed to every enclosing scope.
    pub fn report(&mut self, message: impl Into<String>) {
        let message = self
            .scopes
            .iter()
            .rev()
            .fold(message.into(), |inner, field| messages::nested(field, &inner));
        self.errors.push(message);
    }

    /// Run `f` with `field` pushed as the innermost attribution scope.
    pub fn scoped<R>(&mut self, field: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scopes.push(field.to_string());
        let result = f(self);
        self.scopes.pop();
        result
    }

    /// Number of diagnostics recorded so far.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The diagnostics recorded so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the session and return its diagnostics.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Outcome of validating one document.
///
/// `document` is the validated document with the defaults of absent optional
/// fields filled in, at every nesting level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    valid: bool,
    errors: Vec<String>,
    document: Value,
}

impl Report {
    pub(crate) fn new(valid: bool, diagnostics: Diagnostics, document: Value) -> Self {
        Self {
            valid,
            errors: diagnostics.into_errors(),
            document,
        }
    }

    /// Whether the document satisfied the schema.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Diagnostics in the order they were found.
    ///
    /// Under [`OptionalPolicy::Lenient`](crate::core::OptionalPolicy::Lenient)
    /// a valid report may still carry diagnostics for optional fields.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The document with defaults applied.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Take the document with defaults applied.
    pub fn into_document(self) -> Value {
        self.document
    }

    /// Convert into the defaulted document, or the diagnostics if invalid.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every diagnostic when the
    /// document is invalid.
    pub fn into_result(self) -> Result<Value, ValidationError> {
        if self.valid {
            Ok(self.document)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}
