//! Error types for docdex
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Construction-time errors (`UnsupportedPredicate`, `InvalidPagination`)
//! are never retried; the caller must fix the descriptor. An empty match
//! set is success, not an error.

use crate::document::DocumentId;
use crate::predicate::Operator;
use thiserror::Error;

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the docdex query engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Query or sort references a field the schema does not declare
    #[error("unknown field: {field}")]
    UnknownField {
        /// The field name that failed to resolve
        field: String,
    },

    /// Operator is not applicable to the field's declared type
    #[error("unsupported predicate: {operator} on field {field}: {reason}")]
    UnsupportedPredicate {
        /// Field the predicate targets
        field: String,
        /// Operator that was rejected
        operator: Operator,
        /// Why the combination is invalid
        reason: String,
    },

    /// Lookup by id missed
    #[error("document not found: {id}")]
    NotFound {
        /// The id that was requested
        id: DocumentId,
    },

    /// Page size must be positive
    #[error("invalid page size: {size}")]
    InvalidPagination {
        /// The rejected size
        size: usize,
    },

    /// A stored document could not be mapped back into a typed entity
    #[error("mapping error on field {field}: {reason}")]
    Mapping {
        /// Field that failed to map
        field: String,
        /// Why the mapping failed
        reason: String,
    },
}
