//! Query descriptors
//!
//! A [`QueryDescriptor`] is an ordered, AND-combined predicate list plus an
//! optional sort instruction. Construction is pure: no I/O, no schema
//! lookups (the predicates were already validated when built). Two
//! descriptors with equal predicate lists and sort compare equal and
//! execute identically.

use crate::predicate::Predicate;
use serde::{Deserialize, Serialize};

/// Sort instruction: order results by a field, ascending
///
/// Applied as a stable comparison over the index's base id order, so equal
/// keys keep a deterministic relative order. Documents lacking the sort
/// field order last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Field to order by
    pub field: String,
}

impl Sort {
    /// Sort by the given field
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// An ordered, AND-combined list of predicates plus optional sort
///
/// The empty descriptor matches every document; this is the match-all
/// used by delete-all and count-all.
///
/// # Examples
///
/// ```
/// use docdex_core::{FieldType, Predicate, QueryDescriptor, Schema};
///
/// let schema = Schema::new().field("type", FieldType::Text);
/// let query = QueryDescriptor::new()
///     .filter(Predicate::equals(&schema, "type", "test").unwrap())
///     .sort_by("type");
///
/// assert_eq!(query.predicates().len(), 1);
/// assert!(!query.is_match_all());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    predicates: Vec<Predicate>,
    sort: Option<Sort>,
}

impl QueryDescriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptor that matches every document
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Builder: append a predicate (AND-combined with prior ones)
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Builder: sort results by a field
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(Sort::by(field));
        self
    }

    /// Predicates in application order
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// The sort instruction, if any
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Whether this descriptor matches every document
    pub fn is_match_all(&self) -> bool {
        self.predicates.is_empty()
    }
}
