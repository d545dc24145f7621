//! docdex - derived-query engine for a paginated document repository
//!
//! docdex evaluates explicit query descriptors (field + operator +
//! pagination) against a document store and returns paginated, typed
//! results. There is no reflection and no method-name parsing: every
//! query a repository can run is a statically declared predicate
//! template.
//!
//! # Quick Start
//!
//! ```
//! use docdex::{Entity, MemoryIndex, Notice, NoticeRepository, PageRequest};
//! use std::sync::Arc;
//!
//! // The owning application creates the index once, explicitly.
//! let index = Arc::new(MemoryIndex::new(Notice::schema()));
//! let repository = NoticeRepository::new(index);
//!
//! repository.save(&Notice::new("1").kind("test").message("some message"))?;
//! repository.refresh()?;
//!
//! let page = repository.find_by_kind("test", &PageRequest::first(10)?)?;
//! assert_eq!(page.total_elements, 1);
//! # docdex::Result::Ok(())
//! ```
//!
//! # Architecture
//!
//! - `docdex-core` holds the data model: values, schemas, documents,
//!   predicates, descriptors, and pagination types.
//! - `docdex-index` owns execution: the [`SearchIndex`] contract and the
//!   in-memory [`MemoryIndex`] with its refresh visibility barrier.
//! - `docdex-repository` is the typed surface: [`NoticeRepository`] and
//!   the [`Entity`] mapping seam.

pub use docdex_core::{
    Argument, Document, DocumentId, Error, FieldType, Operator, Page, PageRequest, Predicate,
    QueryDescriptor, Result, Schema, Sort, Value, ID_FIELD,
};
pub use docdex_index::{MemoryIndex, SearchIndex};
pub use docdex_repository::{Entity, Notice, NoticeRepository};
