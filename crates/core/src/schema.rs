//! Schema: the declared field set of an index
//!
//! A schema maps field names to [`FieldType`]s. Predicate construction and
//! query execution both validate field references against it, so a typo in
//! a field name surfaces as [`Error::UnknownField`](crate::Error) instead
//! of an empty result set.

use crate::document::ID_FIELD;
use crate::value::FieldType;
use serde::{Deserialize, Serialize};

/// Declared fields of an index, in declaration order
///
/// Built once by the owning application and handed to the index at
/// construction time. There is no implicit schema inference.
///
/// # Examples
///
/// ```
/// use docdex_core::{FieldType, Schema};
///
/// let schema = Schema::new()
///     .field("type", FieldType::Text)
///     .field("rate", FieldType::Integer);
///
/// assert_eq!(schema.field_type("rate"), Some(FieldType::Integer));
/// assert_eq!(schema.field_type("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<(String, FieldType)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder: declare a field
    ///
    /// Re-declaring an existing field replaces its type in place.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = field_type;
        } else {
            self.fields.push((name, field_type));
        }
        self
    }

    /// Look up the declared type of a field
    ///
    /// The `id` pseudo-field resolves to [`FieldType::Text`] in every
    /// schema unless explicitly re-declared.
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| *t)
            .or(if name == ID_FIELD {
                Some(FieldType::Text)
            } else {
                None
            })
    }

    /// Whether the schema declares a field with this name
    pub fn contains(&self, name: &str) -> bool {
        self.field_type(name).is_some()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.fields.iter().map(|(n, t)| (n.as_str(), *t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::new()
            .field("type", FieldType::Text)
            .field("message", FieldType::Text)
            .field("rate", FieldType::Integer)
            .field("available", FieldType::Boolean)
    }

    #[test]
    fn test_schema_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.field_type("type"), Some(FieldType::Text));
        assert_eq!(schema.field_type("rate"), Some(FieldType::Integer));
        assert_eq!(schema.field_type("available"), Some(FieldType::Boolean));
        assert_eq!(schema.field_type("nope"), None);
        assert!(schema.contains("message"));
        assert!(!schema.contains("Message"));
    }

    #[test]
    fn test_schema_declaration_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["type", "message", "rate", "available"]);
    }

    #[test]
    fn test_schema_redeclare_replaces() {
        let schema = Schema::new()
            .field("rate", FieldType::Text)
            .field("rate", FieldType::Integer);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.field_type("rate"), Some(FieldType::Integer));
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn test_id_pseudo_field_always_text() {
        let schema = Schema::new();
        assert_eq!(schema.field_type("id"), Some(FieldType::Text));
        assert!(schema.contains("id"));

        // Explicit re-declaration wins.
        let schema = Schema::new().field("id", FieldType::Integer);
        assert_eq!(schema.field_type("id"), Some(FieldType::Integer));
    }
}
