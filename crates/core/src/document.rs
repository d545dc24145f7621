//! Document and document identity
//!
//! This module defines:
//! - DocumentId: Unique, immutable identifier for a document
//! - Document: An id plus a field map of scalar values
//!
//! Documents are plain data. Field names are validated against a
//! [`Schema`](crate::Schema) at query time, not at document construction,
//! so a document may carry a subset of the schema's fields.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the id pseudo-field
///
/// Every schema implicitly declares `id` as a text field, so predicates
/// can address the document id (`find_by_id_in` and friends) without the
/// document duplicating it in its field map.
pub const ID_FIELD: &str = "id";

/// Unique identifier for a document within an index
///
/// Caller-assigned, immutable once assigned. Id order is the index's base
/// iteration order, which makes unsorted query results deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a DocumentId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A stored document: id plus named scalar fields
///
/// # Examples
///
/// ```
/// use docdex_core::{Document, Value};
///
/// let doc = Document::new("1")
///     .field("type", "test")
///     .field("rate", 10i64);
///
/// assert_eq!(doc.get("type"), Some(&Value::Str("test".into())));
/// assert_eq!(doc.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique id within the index
    pub id: DocumentId,
    /// Field name to value, ordered by name
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    /// Create a document with no fields
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder: set a field value
    ///
    /// Setting a field twice keeps the last value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value by name
    ///
    /// Returns `None` for absent fields. A `Value::Null` entry is
    /// distinct from an absent field and is returned as-is.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether the document carries this field
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields set on this document
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
