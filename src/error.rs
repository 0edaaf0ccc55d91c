//! Error types for confguard.
//!
//! Problems found *in a document* are never errors here: they are collected as
//! diagnostics in a [`Report`](crate::core::Report). The types in this module
//! cover broken schemas, unreadable sources, and callers that want a failed
//! report turned into a `Result`.

use std::fmt;

/// Result type alias for confguard operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while building a schema or loading and writing documents.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A regular expression supplied to a constraint did not compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Numeric or count bounds are inverted, NaN, or empty.
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// The same field name was registered as both required and optional.
    #[error("Field '{0}' is declared as both required and optional")]
    OverlappingField(String),

    /// An exclusive group names a field that the schema does not declare.
    #[error("Exclusive group references undeclared field '{0}'")]
    UnknownField(String),

    /// An exclusive group needs at least two alternatives to mean anything.
    #[error("Invalid exclusive group: {0}")]
    InvalidGroup(String),

    /// Failed to load a document from a source.
    #[error("Failed to load document: {0}")]
    Load(String),

    /// Failed to parse or render a document.
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// The file extension does not map to a known format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Attempted to use a format whose cargo feature is not enabled.
    #[error("Feature not enabled: {0}")]
    FeatureNotEnabled(&'static str),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document failed validation.
    #[error("Document validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// The diagnostics of a failed validation, as a single error value.
///
/// Produced by [`Report::into_result`](crate::core::Report::into_result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Wrap a list of diagnostics.
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The diagnostics in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the error and return the diagnostics.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "document is invalid"),
            [only] => write!(f, "{}", only),
            errors => {
                writeln!(f, "{} problems found:", errors.len())?;
                for (i, err) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}
