//! Core schema types: field descriptors, schema levels and validation sessions.

mod diagnostics;
mod field;
mod schema;
mod template;

pub use diagnostics::{Diagnostics, Report};
pub use field::FieldDescriptor;
pub use schema::{Context, ExclusiveGroup, OptionalPolicy, Schema, SchemaBuilder};
