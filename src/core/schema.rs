//! Schema levels and the recursive validation engine.

use crate::constraints::is_empty;
use crate::core::{Diagnostics, FieldDescriptor, Report};
use crate::error::{Result, SchemaError};
use crate::messages;
use crate::sources::DocumentSource;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// What a failing optional field does to the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionalPolicy {
    /// A present optional field must satisfy its predicate for the document
    /// to be valid.
    #[default]
    Strict,
    /// A failing optional field is reported but does not invalidate the
    /// document.
    Lenient,
}

/// Fields that compete with each other: at most one alternative may appear.
///
/// Each alternative is a list of field names; an alternative counts as present
/// when any of its fields is in the document as supplied (injected defaults
/// never count).
///
/// # Examples
///
/// ```rust
/// use confguard::core::ExclusiveGroup;
///
/// // Either "Path" alone, or "Host" and/or "Port".
/// let group = ExclusiveGroup::new()
///     .alternative(["Path"])
///     .alternative(["Host", "Port"]);
///
/// // Each name its own alternative.
/// let pick_one = ExclusiveGroup::one_of(["Sweetness", "Sourness"]);
/// assert_eq!(pick_one.alternatives().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusiveGroup {
    alternatives: Vec<Vec<String>>,
}

impl ExclusiveGroup {
    /// An empty group; add alternatives with [`alternative`](Self::alternative).
    pub fn new() -> Self {
        Self::default()
    }

    /// A group in which every named field is its own alternative.
    pub fn one_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alternatives: names.into_iter().map(|name| vec![name.into()]).collect(),
        }
    }

    /// Add an alternative made of one or more field names.
    pub fn alternative<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives
            .push(names.into_iter().map(Into::into).collect());
        self
    }

    /// The alternatives of this group.
    pub fn alternatives(&self) -> &[Vec<String>] {
        &self.alternatives
    }

    /// Names present in `document`, if more than one alternative is represented.
    fn conflict<'a>(&'a self, document: &Map<String, Value>) -> Option<Vec<&'a str>> {
        let mut represented = 0;
        let mut present = Vec::new();
        for alternative in &self.alternatives {
            let before = present.len();
            present.extend(
                alternative
                    .iter()
                    .filter(|name| document.contains_key(name.as_str()))
                    .map(String::as_str),
            );
            if present.len() > before {
                represented += 1;
            }
        }
        (represented > 1).then_some(present)
    }
}

/// Names a validation run in its summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    name: String,
    kind: String,
}

impl Context {
    /// A context rendered as `Validation for <kind> <name> failed.`
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// The name of the validated thing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What kind of thing it is.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// One level of a document: its required fields, optional fields and
/// exclusive groups.
///
/// Schemas are closed: any key that is neither required nor optional is an
/// error. A schema is immutable once built and can validate any number of
/// documents; each validation gets its own [`Diagnostics`].
///
/// # Examples
///
/// ```rust
/// use confguard::constraints::{Check, at_least, one_of};
/// use confguard::core::{FieldDescriptor, Schema};
/// use serde_json::json;
///
/// # fn main() -> confguard::error::Result<()> {
/// let schema = Schema::builder()
///     .required(FieldDescriptor::new(
///         "Fruit",
///         "One of Grape, Orange or Apple.",
///         Check::string().with(one_of(["Grape", "Orange", "Apple"])),
///     ))
///     .optional(
///         FieldDescriptor::new(
///             "NumberConsumed",
///             "How many were eaten.",
///             Check::integer().with(at_least(0.0)?),
///         )
///         .with_default(0),
///     )
///     .build()?;
///
/// let report = schema.validate(&json!({"Fruit": "Apple"}));
/// assert!(report.is_valid());
/// assert_eq!(report.document(), &json!({"Fruit": "Apple", "NumberConsumed": 0}));
///
/// let report = schema.validate(&json!({"Fruit": "Apple", "Colour": "red"}));
/// assert!(!report.is_valid());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    required: Vec<FieldDescriptor>,
    optional: Vec<FieldDescriptor>,
    exclusive: Vec<ExclusiveGroup>,
    policy: OptionalPolicy,
}

impl Schema {
    /// Create a new builder for constructing a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Required fields in registration order.
    pub fn required(&self) -> &[FieldDescriptor] {
        &self.required
    }

    /// Optional fields in registration order.
    pub fn optional(&self) -> &[FieldDescriptor] {
        &self.optional
    }

    /// Exclusive groups in registration order.
    pub fn exclusive_groups(&self) -> &[ExclusiveGroup] {
        &self.exclusive
    }

    /// How failing optional fields affect the verdict.
    pub fn optional_policy(&self) -> OptionalPolicy {
        self.policy
    }

    /// Every field, required first.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.required.iter().chain(self.optional.iter())
    }

    /// Look up a field of this level by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|field| field.name() == name)
    }

    fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Validate a copy of `document`; the caller's value is left untouched.
    ///
    /// The returned report carries the copy with defaults applied.
    pub fn validate(&self, document: &Value) -> Report {
        self.validate_owned(document.clone())
    }

    /// Validate an owned document, returning it with defaults applied.
    pub fn validate_owned(&self, mut document: Value) -> Report {
        let (valid, diagnostics) = self.evaluate(&mut document, None);
        Report::new(valid, diagnostics, document)
    }

    /// Validate a copy of `document`, ending a failed run with
    /// `Validation for <kind> <name> failed.`
    pub fn validate_as(&self, document: &Value, name: &str, kind: &str) -> Report {
        let mut document = document.clone();
        let context = Context::new(name, kind);
        let (valid, diagnostics) = self.evaluate(&mut document, Some(&context));
        Report::new(valid, diagnostics, document)
    }

    /// Validate `document` and inject defaults into it directly.
    ///
    /// The report holds a copy of the mutated document.
    pub fn validate_in_place(&self, document: &mut Value) -> Report {
        let (valid, diagnostics) = self.evaluate(document, None);
        Report::new(valid, diagnostics, document.clone())
    }

    /// Load a document from `source` and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source cannot be read or parsed; an
    /// invalid document is reported through the returned [`Report`].
    pub fn validate_source(&self, source: &dyn DocumentSource) -> Result<Report> {
        #[cfg(feature = "tracing")]
        tracing::debug!(source = %source.name(), "loading document");

        let document = source.load()?;
        Ok(self.validate_owned(document))
    }

    fn evaluate(&self, document: &mut Value, context: Option<&Context>) -> (bool, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let valid = match document {
            Value::Object(map) => self.check(map, &mut diagnostics, context),
            other => {
                diagnostics.report(messages::not_an_object(other));
                if let Some(context) = context {
                    diagnostics.report(messages::summary(context.kind(), context.name()));
                }
                false
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(valid, diagnostics = diagnostics.len(), "validation finished");

        (valid, diagnostics)
    }

    /// Validate one object level, appending to an existing session.
    ///
    /// This is the recursive core: nested-object constraints call it with the
    /// sub-object and the shared session. Absent optional fields with defaults
    /// are inserted into `document`. Returns whether this level is valid.
    pub fn check(
        &self,
        document: &mut Map<String, Value>,
        diagnostics: &mut Diagnostics,
        context: Option<&Context>,
    ) -> bool {
        // Judged on the document as supplied, before defaults are injected.
        let conflicts: Vec<Vec<&str>> = self
            .exclusive
            .iter()
            .filter_map(|group| group.conflict(document))
            .collect();

        let mut valid = true;
        valid &= self.check_required(document, diagnostics);
        valid &= self.check_optional(document, diagnostics);
        valid &= self.check_unrecognized(document, diagnostics);

        for present in conflicts {
            diagnostics.report(messages::exclusive_conflict(&present));
            valid = false;
        }

        if !valid {
            if let Some(context) = context {
                diagnostics.report(messages::summary(context.kind(), context.name()));
            }
        }
        valid
    }

    fn check_required(
        &self,
        document: &mut Map<String, Value>,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        let mut valid = true;
        for field in &self.required {
            let Some(value) = document.get_mut(field.name()) else {
                diagnostics.report(messages::missing_required(field.name(), field.explanation()));
                valid = false;
                continue;
            };

            if is_empty(value) {
                diagnostics.report(messages::empty_required(field.name(), field.explanation()));
                valid = false;
            } else if !field.validate(value, diagnostics) {
                diagnostics.report(messages::rejected(field.name(), field.explanation()));
                valid = false;
            }
        }
        valid
    }

    fn check_optional(
        &self,
        document: &mut Map<String, Value>,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        let mut valid = true;
        for field in &self.optional {
            match document.get_mut(field.name()) {
                Some(value) => {
                    if !field.validate(value, diagnostics) {
                        diagnostics.report(messages::rejected(field.name(), field.explanation()));
                        if self.policy == OptionalPolicy::Strict {
                            valid = false;
                        }
                    }
                }
                None => {
                    if let Some(default) = field.default() {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(field = field.name(), "injecting default value");

                        document.insert(field.name().to_string(), default.clone());
                    }
                }
            }
        }
        valid
    }

    fn check_unrecognized(
        &self,
        document: &Map<String, Value>,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        let mut valid = true;
        for key in document.keys().filter(|key| !self.declares(key)) {
            diagnostics.report(messages::unrecognized(key));
            valid = false;
        }
        valid
    }

    /// A document mapping every field, required then optional, to its
    /// explanation.
    ///
    /// Useful as a starting point for users writing a new document; the
    /// result is not expected to validate.
    pub fn template(&self) -> Value {
        let map: Map<String, Value> = self
            .fields()
            .map(|field| {
                (
                    field.name().to_string(),
                    Value::String(field.explanation().to_string()),
                )
            })
            .collect();
        Value::Object(map)
    }
}

/// Builder for constructing a [`Schema`].
///
/// Field sets are additive: registering a name that is already in the same
/// set keeps the first descriptor. A schema is extended by starting a builder
/// from it with [`extend`](Self::extend) and adding to it.
///
/// # Examples
///
/// ```rust
/// use confguard::constraints::Check;
/// use confguard::core::{ExclusiveGroup, FieldDescriptor, OptionalPolicy, Schema};
///
/// # fn main() -> confguard::error::Result<()> {
/// let base = Schema::builder()
///     .required(FieldDescriptor::new("Name", "Display name.", Check::string()))
///     .build()?;
///
/// let extended = Schema::builder()
///     .extend(&base)
///     .optional(FieldDescriptor::new("Sweetness", "1 to 10.", Check::integer()))
///     .optional(FieldDescriptor::new("Sourness", "1 to 10.", Check::integer()))
///     .exclusive(ExclusiveGroup::one_of(["Sweetness", "Sourness"]))
///     .optional_policy(OptionalPolicy::Strict)
///     .build()?;
///
/// assert_eq!(extended.fields().count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    required: Vec<FieldDescriptor>,
    optional: Vec<FieldDescriptor>,
    exclusive: Vec<ExclusiveGroup>,
    policy: OptionalPolicy,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field that must be present.
    pub fn required(mut self, field: FieldDescriptor) -> Self {
        insert_unique(&mut self.required, field);
        self
    }

    /// Register a field that may be absent.
    pub fn optional(mut self, field: FieldDescriptor) -> Self {
        insert_unique(&mut self.optional, field);
        self
    }

    /// Register a group of mutually exclusive fields.
    pub fn exclusive(mut self, group: ExclusiveGroup) -> Self {
        self.exclusive.push(group);
        self
    }

    /// Choose how failing optional fields affect the verdict.
    pub fn optional_policy(mut self, policy: OptionalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Merge in every field and exclusive group of `base`.
    pub fn extend(mut self, base: &Schema) -> Self {
        for field in &base.required {
            insert_unique(&mut self.required, field.clone());
        }
        for field in &base.optional {
            insert_unique(&mut self.optional, field.clone());
        }
        self.exclusive.extend(base.exclusive.iter().cloned());
        self
    }

    /// Build the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a name is registered as both required and optional
    /// - an exclusive group has fewer than two alternatives, or an empty one
    /// - an exclusive group names the same field more than once
    /// - an exclusive group names an undeclared field
    pub fn build(self) -> Result<Schema> {
        if let Some(field) = self
            .required
            .iter()
            .find(|field| self.optional.contains(field))
        {
            return Err(SchemaError::OverlappingField(field.name().to_string()));
        }

        let schema = Schema {
            required: self.required,
            optional: self.optional,
            exclusive: Vec::new(),
            policy: self.policy,
        };

        for group in &self.exclusive {
            if group.alternatives().len() < 2 {
                return Err(SchemaError::InvalidGroup(format!(
                    "{:?} has fewer than two alternatives",
                    group.alternatives()
                )));
            }
            if group.alternatives().iter().any(Vec::is_empty) {
                return Err(SchemaError::InvalidGroup(format!(
                    "{:?} contains an empty alternative",
                    group.alternatives()
                )));
            }
            let mut seen = HashSet::new();
            if let Some(name) = group
                .alternatives()
                .iter()
                .flatten()
                .find(|name| !seen.insert(name.as_str()))
            {
                return Err(SchemaError::InvalidGroup(format!(
                    "{:?} names \"{}\" more than once",
                    group.alternatives(),
                    name
                )));
            }
            if let Some(name) = group
                .alternatives()
                .iter()
                .flatten()
                .find(|name| !schema.declares(name))
            {
                return Err(SchemaError::UnknownField(name.clone()));
            }
        }

        Ok(Schema {
            exclusive: self.exclusive,
            ..schema
        })
    }
}

fn insert_unique(set: &mut Vec<FieldDescriptor>, field: FieldDescriptor) {
    if set.contains(&field) {
        #[cfg(feature = "tracing")]
        tracing::debug!(field = field.name(), "ignoring duplicate field descriptor");
        return;
    }
    set.push(field);
}
