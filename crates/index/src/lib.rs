//! Search index abstraction and the in-memory implementation
//!
//! This crate owns query execution:
//! - SearchIndex: the four-operation store contract (upsert,
//!   delete-by-descriptor, refresh, execute) plus point lookup and count
//! - MemoryIndex: BTreeMap-backed implementation with buffered writes
//!
//! Predicate evaluation and pagination math live here; the data model
//! they operate on lives in `docdex-core`.

#![warn(clippy::all)]

mod eval;
mod memory;

pub use memory::MemoryIndex;

use docdex_core::{Document, DocumentId, Page, PageRequest, QueryDescriptor, Result, Schema};

/// Store abstraction the repository layer talks to
///
/// This trait enables swapping the embedded in-memory implementation for
/// a real search engine binding without breaking the typed layer above.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). Writes may be issued
/// concurrently; the implementation serializes them internally and no
/// caller-visible partial-write state exists.
///
/// ## Visibility
///
/// `upsert` and `delete_matching` are not guaranteed observable by
/// `execute`, `get`, or `count` until a `refresh` call returns. Refresh
/// is the synchronization barrier between writers and readers.
pub trait SearchIndex: Send + Sync {
    /// The index's declared field set
    fn schema(&self) -> &Schema;

    /// Insert or replace a document by id
    ///
    /// Buffered: not visible to readers until [`SearchIndex::refresh`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn upsert(&self, document: Document) -> Result<()>;

    /// Remove every document satisfying the descriptor
    ///
    /// The empty descriptor deletes all documents. The descriptor is
    /// validated eagerly; the deletion itself is buffered and applies at
    /// the next refresh, in issue order relative to other writes.
    ///
    /// # Errors
    ///
    /// Returns [`docdex_core::Error::UnknownField`] if the descriptor
    /// references a field the schema does not declare.
    fn delete_matching(&self, query: &QueryDescriptor) -> Result<()>;

    /// Make all prior writes visible to subsequent reads
    ///
    /// Completes once every buffered write has been applied. Writes
    /// issued concurrently with the refresh stay buffered for the next
    /// one.
    ///
    /// # Errors
    ///
    /// Returns an error if a buffered write cannot be applied.
    fn refresh(&self) -> Result<()>;

    /// Evaluate a descriptor over the visible collection
    ///
    /// Predicates are AND-combined; sort applies if present;
    /// `total_elements` is the full match count computed before the
    /// pagination window slices `[offset, offset + size)`. An empty
    /// match set is a successful empty page, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`docdex_core::Error::UnknownField`] if the descriptor or
    /// its sort references a field the schema does not declare.
    fn execute(&self, query: &QueryDescriptor, page: &PageRequest) -> Result<Page<Document>>;

    /// Point lookup by id over the visible collection
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, id: &DocumentId) -> Result<Option<Document>>;

    /// Full match count for a descriptor, without paging
    ///
    /// # Errors
    ///
    /// Returns [`docdex_core::Error::UnknownField`] as `execute` does.
    fn count(&self, query: &QueryDescriptor) -> Result<u64>;
}
