//! Typed entity mapping
//!
//! This module defines:
//! - Entity: the document-mapping seam between typed structs and the index
//! - Notice: the concrete entity the repository serves
//!
//! Mapping is lenient about absent fields (a stored document may carry a
//! subset of the schema, and absent maps to the field's default) but
//! strict about variant mismatches, which indicate a document written
//! outside the schema.

use docdex_core::{Document, Error, FieldType, Result, Schema, Value};
use serde::{Deserialize, Serialize};

/// Mapping seam between a typed struct and its stored document
///
/// Implementations own their schema and the conversion in both
/// directions. The repository layer is written entirely against this
/// trait plus the index contract.
pub trait Entity: Sized {
    /// Declared field set for this entity type
    fn schema() -> Schema;

    /// The entity's unique id
    fn id(&self) -> &str;

    /// Convert into the stored document form
    fn to_document(&self) -> Document;

    /// Rebuild from a stored document
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] if a stored field's variant does not
    /// fit the entity's declared type.
    fn from_document(document: &Document) -> Result<Self>;
}

/// A posted notice: the sample document type the repository serves
///
/// Field `kind` is stored under the document field name `type`.
///
/// # Examples
///
/// ```
/// use docdex_repository::Notice;
///
/// let notice = Notice::new("1")
///     .kind("test")
///     .message("some message")
///     .rate(10);
/// assert_eq!(notice.rate, 10);
/// assert!(!notice.available);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Unique id, immutable once assigned
    pub id: String,
    /// Notice category, stored as the `type` field
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text body
    pub message: String,
    /// Relevance rate
    pub rate: i64,
    /// Whether the notice is currently available
    pub available: bool,
}

impl Notice {
    /// Create a notice with the given id and default fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder: set the kind (`type` field)
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder: set the message body
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builder: set the rate
    pub fn rate(mut self, rate: i64) -> Self {
        self.rate = rate;
        self
    }

    /// Builder: set availability
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

impl Entity for Notice {
    fn schema() -> Schema {
        Schema::new()
            .field("type", FieldType::Text)
            .field("message", FieldType::Text)
            .field("rate", FieldType::Integer)
            .field("available", FieldType::Boolean)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_document(&self) -> Document {
        Document::new(self.id.clone())
            .field("type", self.kind.clone())
            .field("message", self.message.clone())
            .field("rate", self.rate)
            .field("available", self.available)
    }

    fn from_document(document: &Document) -> Result<Self> {
        Ok(Self {
            id: document.id.as_str().to_string(),
            kind: text_field(document, "type")?,
            message: text_field(document, "message")?,
            rate: int_field(document, "rate")?,
            available: bool_field(document, "available")?,
        })
    }
}

fn mapping_error(field: &str, value: &Value, expected: &str) -> Error {
    Error::Mapping {
        field: field.to_string(),
        reason: format!("expected {}, got {}", expected, value.type_name()),
    }
}

fn text_field(document: &Document, field: &str) -> Result<String> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::Str(s)) => Ok(s.clone()),
        Some(other) => Err(mapping_error(field, other, "text")),
    }
}

fn int_field(document: &Document, field: &str) -> Result<i64> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Int(i)) => Ok(*i),
        Some(other) => Err(mapping_error(field, other, "integer")),
    }
}

fn bool_field(document: &Document, field: &str) -> Result<bool> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(mapping_error(field, other, "boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_roundtrip() {
        let notice = Notice::new("7")
            .kind("test")
            .message("some message")
            .rate(10)
            .available(true);
        let doc = notice.to_document();

        assert_eq!(doc.id.as_str(), "7");
        assert_eq!(doc.get("type"), Some(&Value::Str("test".into())));
        assert_eq!(Notice::from_document(&doc).unwrap(), notice);
    }

    #[test]
    fn test_partial_document_maps_to_defaults() {
        let doc = Document::new("1").field("message", "foo");
        let notice = Notice::from_document(&doc).unwrap();
        assert_eq!(notice.message, "foo");
        assert_eq!(notice.kind, "");
        assert_eq!(notice.rate, 0);
        assert!(!notice.available);
    }

    #[test]
    fn test_variant_mismatch_is_mapping_error() {
        let doc = Document::new("1").field("rate", "fast");
        assert!(matches!(
            Notice::from_document(&doc),
            Err(Error::Mapping { .. })
        ));
    }

    #[test]
    fn test_schema_covers_all_fields() {
        let schema = Notice::schema();
        for field in ["type", "message", "rate", "available"] {
            assert!(schema.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_serde_renames_kind_to_type() {
        let notice = Notice::new("1").kind("test");
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains("\"type\":\"test\""));
        assert!(!json.contains("kind"));
    }
}
