//! NoticeRepository: typed finders over a search index
//!
//! ## Design
//!
//! The repository is a stateless facade over one [`SearchIndex`]. It
//! holds no state beyond the `Arc<dyn SearchIndex>` reference and is
//! `Send + Sync`, so instances can be shared across threads freely.
//!
//! Every finder is a fixed, statically declared {field, operator}
//! template. There is deliberately no runtime derivation of queries from
//! method names; the compiler sees every predicate this type can build.

use crate::entity::{Entity, Notice};
use docdex_core::{
    DocumentId, Error, Page, PageRequest, Predicate, QueryDescriptor, Result, Schema, Value,
};
use docdex_index::SearchIndex;
use std::sync::Arc;
use tracing::debug;

/// Typed repository surface for [`Notice`] documents
///
/// # Examples
///
/// ```
/// use docdex_index::MemoryIndex;
/// use docdex_repository::{Entity, Notice, NoticeRepository};
/// use docdex_core::PageRequest;
/// use std::sync::Arc;
///
/// let index = Arc::new(MemoryIndex::new(Notice::schema()));
/// let repository = NoticeRepository::new(index);
///
/// repository.save(&Notice::new("1").kind("test").message("some message"))?;
/// repository.refresh()?;
///
/// let page = repository.find_by_kind("test", &PageRequest::first(10)?)?;
/// assert_eq!(page.total_elements, 1);
/// # docdex_core::Result::Ok(())
/// ```
#[derive(Clone)]
pub struct NoticeRepository {
    index: Arc<dyn SearchIndex>,
}

impl NoticeRepository {
    /// Create a repository over an existing index
    ///
    /// The index is expected to have been created with
    /// [`Notice::schema`]; the owning application does that once, before
    /// any repository operation.
    pub fn new(index: Arc<dyn SearchIndex>) -> Self {
        Self { index }
    }

    fn schema(&self) -> &Schema {
        self.index.schema()
    }

    // ========== Persistence ==========

    /// Insert or replace a notice by id
    ///
    /// Not visible to finders until [`NoticeRepository::refresh`].
    ///
    /// # Errors
    ///
    /// Returns an error if the index rejects the write.
    pub fn save(&self, notice: &Notice) -> Result<()> {
        self.index.upsert(notice.to_document())
    }

    /// Save every notice in the iterator
    ///
    /// # Errors
    ///
    /// Returns the first write error; earlier writes stay buffered.
    pub fn save_all<'a>(&self, notices: impl IntoIterator<Item = &'a Notice>) -> Result<()> {
        let mut saved = 0usize;
        for notice in notices {
            self.save(notice)?;
            saved += 1;
        }
        debug!(saved, "buffered batch save");
        Ok(())
    }

    /// Delete every notice
    ///
    /// Applies at the next refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the index rejects the delete.
    pub fn delete_all(&self) -> Result<()> {
        self.index.delete_matching(&QueryDescriptor::match_all())
    }

    /// Delete every notice of the given kind
    ///
    /// # Errors
    ///
    /// Returns an error if the index rejects the delete.
    pub fn delete_by_kind(&self, kind: &str) -> Result<()> {
        let query = QueryDescriptor::new()
            .filter(Predicate::equals(self.schema(), "type", kind)?);
        self.index.delete_matching(&query)
    }

    /// Make all prior writes visible to subsequent finders
    ///
    /// # Errors
    ///
    /// Returns an error if a buffered write cannot be applied.
    pub fn refresh(&self) -> Result<()> {
        self.index.refresh()
    }

    /// Total number of visible notices
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be read.
    pub fn count(&self) -> Result<u64> {
        self.index.count(&QueryDescriptor::match_all())
    }

    // ========== Point Lookup ==========

    /// Fetch one notice by id
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no visible notice has the id.
    pub fn find_by_id(&self, id: &str) -> Result<Notice> {
        let document = self
            .index
            .get(&DocumentId::new(id))?
            .ok_or_else(|| Error::NotFound {
                id: DocumentId::new(id),
            })?;
        Notice::from_document(&document)
    }

    // ========== Finders ==========

    /// Notices whose kind equals `kind`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_kind(&self, kind: &str, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::equals(self.schema(), "type", kind)?, page)
    }

    /// Notices whose kind differs from `kind`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_kind_not(&self, kind: &str, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::not_equals(self.schema(), "type", kind)?, page)
    }

    /// Notices whose message equals `message`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_message(&self, message: &str, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::equals(self.schema(), "message", message)?, page)
    }

    /// Notices with rate strictly below `rate`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_rate_less_than(&self, rate: i64, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::less_than(self.schema(), "rate", rate)?, page)
    }

    /// Ordered-scalar alias of [`NoticeRepository::find_by_rate_less_than`]
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_rate_before(&self, rate: i64, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::before(self.schema(), "rate", rate)?, page)
    }

    /// Notices with rate strictly above `rate`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_rate_greater_than(&self, rate: i64, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::greater_than(self.schema(), "rate", rate)?, page)
    }

    /// Ordered-scalar alias of [`NoticeRepository::find_by_rate_greater_than`]
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_rate_after(&self, rate: i64, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::after(self.schema(), "rate", rate)?, page)
    }

    /// Notices whose message contains `pattern`, case-insensitively
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_message_like(&self, pattern: &str, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::like(self.schema(), "message", pattern)?, page)
    }

    /// Notices whose message starts with `prefix`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_message_starting_with(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Page<Notice>> {
        self.find(
            Predicate::starting_with(self.schema(), "message", prefix)?,
            page,
        )
    }

    /// Notices whose message ends with `suffix`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_message_ending_with(
        &self,
        suffix: &str,
        page: &PageRequest,
    ) -> Result<Page<Notice>> {
        self.find(
            Predicate::ending_with(self.schema(), "message", suffix)?,
            page,
        )
    }

    /// Notices whose message contains `substring`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_message_containing(
        &self,
        substring: &str,
        page: &PageRequest,
    ) -> Result<Page<Notice>> {
        self.find(
            Predicate::containing(self.schema(), "message", substring)?,
            page,
        )
    }

    /// Notices whose id is one of `ids`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_id_in(&self, ids: &[&str], page: &PageRequest) -> Result<Page<Notice>> {
        let values: Vec<Value> = ids.iter().map(|id| Value::from(*id)).collect();
        self.find(Predicate::in_set(self.schema(), "id", values)?, page)
    }

    /// Notices whose id is none of `ids`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_id_not_in(&self, ids: &[&str], page: &PageRequest) -> Result<Page<Notice>> {
        let values: Vec<Value> = ids.iter().map(|id| Value::from(*id)).collect();
        self.find(Predicate::not_in(self.schema(), "id", values)?, page)
    }

    /// Notices whose availability equals `available`
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_available(&self, available: bool, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(
            Predicate::equals(self.schema(), "available", available)?,
            page,
        )
    }

    /// Notices that are available
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_available_true(&self, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::is_true(self.schema(), "available")?, page)
    }

    /// Notices that are not available
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_available_false(&self, page: &PageRequest) -> Result<Page<Notice>> {
        self.find(Predicate::is_false(self.schema(), "available")?, page)
    }

    /// Notices whose message equals `message`, ordered by message
    ///
    /// # Errors
    ///
    /// Propagates descriptor or index errors.
    pub fn find_by_message_order_by_message(
        &self,
        message: &str,
        page: &PageRequest,
    ) -> Result<Page<Notice>> {
        let query = QueryDescriptor::new()
            .filter(Predicate::equals(self.schema(), "message", message)?)
            .sort_by("message");
        self.execute(&query, page)
    }

    // ========== Execution ==========

    /// Run an arbitrary descriptor and map hits into notices
    ///
    /// Escape hatch for combinations the named finders do not cover.
    ///
    /// # Errors
    ///
    /// Propagates descriptor, index, and mapping errors.
    pub fn execute(&self, query: &QueryDescriptor, page: &PageRequest) -> Result<Page<Notice>> {
        self.index
            .execute(query, page)?
            .try_map(|document| Notice::from_document(&document))
    }

    fn find(&self, predicate: Predicate, page: &PageRequest) -> Result<Page<Notice>> {
        let query = QueryDescriptor::new().filter(predicate);
        self.execute(&query, page)
    }
}
