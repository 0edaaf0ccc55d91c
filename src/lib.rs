//! # confguard
//!
//! Strict, composable schema validation for JSON-like configuration documents.
//!
//! ## Overview
//!
//! `confguard` checks a parsed document against a schema assembled by the
//! host application and reports *every* problem in one pass, as an ordered
//! list of human-readable diagnostics:
//! - Field descriptors carry a name, an explanation and an optional default
//! - Predicates are composed from a type check plus any number of constraints
//! - Nested objects are validated recursively against child schemas
//! - Schemas are closed: undeclared keys are errors
//! - Mutually exclusive field groups
//! - Template documents generated from the schema's explanations
//!
//! ## Quick Start
//!
//! ```rust
//! use confguard::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> confguard::error::Result<()> {
//! let schema = Schema::builder()
//!     .required(FieldDescriptor::new(
//!         "Fruit",
//!         "The fruit eaten: Grape, Orange or Apple.",
//!         Check::string().with(one_of(["Grape", "Orange", "Apple"])),
//!     ))
//!     .required(FieldDescriptor::new(
//!         "NumberConsumed",
//!         "How many were eaten, a whole number of at least zero.",
//!         Check::integer().with(at_least(0.0)?),
//!     ))
//!     .build()?;
//!
//! let report = schema.validate(&json!({
//!     "Fruit": "Watermelon",
//!     "NumberConsumed": "bleventeen"
//! }));
//!
//! assert!(!report.is_valid());
//! for error in report.errors() {
//!     println!("{}", error);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `yaml`: load YAML documents and write YAML templates
//! - `toml`: load TOML documents and write TOML templates
//! - `all-formats`: both of the above
//! - `tracing` (default): emit `tracing` debug events during validation

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod constraints;
pub mod core;
pub mod error;
pub mod sources;

mod messages;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::constraints::{
        Check, Constraint, ValueType, at_least, between, each, items_at_least, items_between,
        matches, object, one_of, properties_at_least, properties_between, within,
    };
    pub use crate::core::{
        Diagnostics, ExclusiveGroup, FieldDescriptor, OptionalPolicy, Report, Schema,
    };
    pub use crate::error::{Result, SchemaError, ValidationError};
    pub use crate::sources::{DocumentSource, FileSource, Format, InlineSource};
}
