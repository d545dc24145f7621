//! Core types for the docdex query engine
//!
//! This crate defines the foundational types used throughout the system:
//! - Value / FieldType: Scalar values and their schema-level types
//! - Schema: Declared field set of an index
//! - DocumentId / Document: Stored documents
//! - Operator / Argument / Predicate: Validated field conditions
//! - QueryDescriptor / Sort: AND-combined predicate lists
//! - PageRequest / Page: Pagination windows and result slices
//! - Error: Error type hierarchy
//!
//! Everything here is pure data plus validation. I/O and evaluation live
//! in `docdex-index`; typed entity mapping lives in `docdex-repository`.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod document;
pub mod error;
pub mod page;
pub mod predicate;
pub mod query;
pub mod schema;
pub mod value;

// Re-export commonly used types at the crate root
pub use document::{Document, DocumentId, ID_FIELD};
pub use error::{Error, Result};
pub use page::{Page, PageRequest};
pub use predicate::{Argument, Operator, Predicate};
pub use query::{QueryDescriptor, Sort};
pub use schema::Schema;
pub use value::{FieldType, Value};
