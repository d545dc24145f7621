//! MemoryIndex: in-memory search index with refresh visibility
//!
//! This module implements the SearchIndex trait using:
//! - `BTreeMap<DocumentId, Document>` for the visible collection
//! - `parking_lot::RwLock` for thread-safe reads during writes
//! - `parking_lot::Mutex` serializing the pending write log
//!
//! # Design Notes
//!
//! - **Writes are buffered**: `upsert` and `delete_matching` append to a
//!   pending log; nothing becomes observable until `refresh` drains the
//!   log into the visible map, in issue order.
//! - **Readers never block on writers**: queries take the visible map's
//!   read lock only; buffering keeps the write lock out of the hot path.
//! - **Id order is the base order**: BTreeMap iteration gives unsorted
//!   results a deterministic order, and gives the stable sort its
//!   tie-break.

use crate::eval;
use crate::SearchIndex;
use docdex_core::{Document, DocumentId, Page, PageRequest, QueryDescriptor, Result, Schema};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A buffered write operation, applied at the next refresh
#[derive(Debug, Clone)]
enum PendingOp {
    Upsert(Document),
    DeleteMatching(QueryDescriptor),
}

/// In-memory search index
///
/// Created explicitly with [`MemoryIndex::new`] by the owning
/// application; there is no implicit index creation on first use.
///
/// # Examples
///
/// ```
/// use docdex_core::{Document, FieldType, PageRequest, Predicate, QueryDescriptor, Schema};
/// use docdex_index::{MemoryIndex, SearchIndex};
///
/// let index = MemoryIndex::new(Schema::new().field("type", FieldType::Text));
/// index.upsert(Document::new("1").field("type", "test"))?;
/// index.refresh()?;
///
/// let query = QueryDescriptor::new()
///     .filter(Predicate::equals(index.schema(), "type", "test")?);
/// let page = index.execute(&query, &PageRequest::first(10)?)?;
/// assert_eq!(page.total_elements, 1);
/// # docdex_core::Result::Ok(())
/// ```
#[derive(Debug)]
pub struct MemoryIndex {
    /// Declared field set, fixed at construction
    schema: Schema,
    /// The visible collection: refreshed documents by id
    visible: RwLock<BTreeMap<DocumentId, Document>>,
    /// Buffered writes awaiting the next refresh, in issue order
    pending: Mutex<Vec<PendingOp>>,
}

impl MemoryIndex {
    /// Create an empty index over the given schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            visible: RwLock::new(BTreeMap::new()),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Number of visible documents
    pub fn visible_len(&self) -> usize {
        self.visible.read().len()
    }

    /// Number of buffered writes awaiting refresh
    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }
}

impl SearchIndex for MemoryIndex {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn upsert(&self, document: Document) -> Result<()> {
        trace!(id = %document.id, fields = document.field_count(), "buffering upsert");
        self.pending.lock().push(PendingOp::Upsert(document));
        Ok(())
    }

    fn delete_matching(&self, query: &QueryDescriptor) -> Result<()> {
        eval::validate_descriptor(&self.schema, query)?;
        trace!(predicates = query.predicates().len(), "buffering delete");
        self.pending
            .lock()
            .push(PendingOp::DeleteMatching(query.clone()));
        Ok(())
    }

    fn refresh(&self) -> Result<()> {
        // Drain the log first; writes issued while the visible map is
        // being updated stay buffered for the next refresh.
        let ops = std::mem::take(&mut *self.pending.lock());
        if ops.is_empty() {
            return Ok(());
        }

        let mut visible = self.visible.write();
        let op_count = ops.len();
        for op in ops {
            match op {
                PendingOp::Upsert(document) => {
                    visible.insert(document.id.clone(), document);
                }
                PendingOp::DeleteMatching(query) => {
                    let mut doomed = Vec::new();
                    for (id, document) in visible.iter() {
                        if eval::document_matches_all(&self.schema, document, &query)? {
                            doomed.push(id.clone());
                        }
                    }
                    for id in &doomed {
                        visible.remove(id);
                    }
                }
            }
        }
        debug!(applied = op_count, visible = visible.len(), "refresh complete");
        Ok(())
    }

    fn execute(&self, query: &QueryDescriptor, page: &PageRequest) -> Result<Page<Document>> {
        eval::validate_descriptor(&self.schema, query)?;

        let visible = self.visible.read();
        let mut hits: Vec<&Document> = Vec::new();
        for document in visible.values() {
            if eval::document_matches_all(&self.schema, document, query)? {
                hits.push(document);
            }
        }

        if let Some(sort) = query.sort() {
            // sort_by is stable: equal keys keep id order.
            hits.sort_by(|a, b| eval::compare_by_field(&sort.field, a, b));
        }

        let total_elements = hits.len() as u64;
        let content: Vec<Document> = hits
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .cloned()
            .collect();

        debug!(
            total = total_elements,
            returned = content.len(),
            page = page.page,
            "query executed"
        );
        Ok(Page::new(content, total_elements, page))
    }

    fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        Ok(self.visible.read().get(id).cloned())
    }

    fn count(&self, query: &QueryDescriptor) -> Result<u64> {
        eval::validate_descriptor(&self.schema, query)?;
        let visible = self.visible.read();
        let mut count = 0u64;
        for document in visible.values() {
            if eval::document_matches_all(&self.schema, document, query)? {
                count += 1;
            }
        }
        Ok(count)
    }
}
