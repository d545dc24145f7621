//! Pagination types
//!
//! This module defines:
//! - PageRequest: 0-based page index plus positive page size
//! - Page: a bounded slice of matches plus the total match count
//!
//! The offset math lives here so every index implementation slices the
//! same way: `offset = page * size`, window `[offset, offset + size)`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A pagination window: 0-based page index and positive page size
///
/// # Examples
///
/// ```
/// use docdex_core::PageRequest;
///
/// let page = PageRequest::of(2, 10).unwrap();
/// assert_eq!(page.offset(), 20);
///
/// // Zero page size is a construction-time error.
/// assert!(PageRequest::of(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    pub page: usize,
    /// Number of results per page, always positive
    pub size: usize,
}

impl PageRequest {
    /// Create a page request
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPagination`] if `size` is zero.
    pub fn of(page: usize, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidPagination { size });
        }
        Ok(Self { page, size })
    }

    /// The first page with the given size
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPagination`] if `size` is zero.
    pub fn first(size: usize) -> Result<Self> {
        Self::of(0, size)
    }

    /// Absolute offset of the window start
    pub fn offset(&self) -> usize {
        self.page * self.size
    }

    /// The request for the page after this one
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }
}

/// A bounded slice of matches plus the total match count
///
/// `total_elements` reflects the full match count before the window was
/// applied; `content.len() <= size` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Matches inside the requested window, in result order
    pub content: Vec<T>,
    /// Full match count before pagination
    pub total_elements: u64,
    /// 0-based index of this page
    pub page: usize,
    /// Requested page size
    pub size: usize,
}

impl<T> Page<T> {
    /// Create a page from a window of content and the full match count
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        debug_assert!(content.len() <= request.size);
        Self {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }

    /// An empty page for the given request
    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }

    /// Number of elements on this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this page holds no elements
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Total number of pages at this page size
    pub fn total_pages(&self) -> u64 {
        let size = self.size as u64;
        (self.total_elements + size - 1) / size
    }

    /// Map page content, keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        }
    }

    /// Fallibly map page content, keeping the pagination metadata
    ///
    /// # Errors
    ///
    /// Returns the first mapping error.
    pub fn try_map<U>(self, f: impl FnMut(T) -> Result<U>) -> Result<Page<U>> {
        let content = self
            .content
            .into_iter()
            .map(f)
            .collect::<Result<Vec<U>>>()?;
        Ok(Page {
            content,
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        let p = PageRequest::of(0, 10).unwrap();
        assert_eq!(p.offset(), 0);

        let p = PageRequest::of(3, 7).unwrap();
        assert_eq!(p.offset(), 21);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            PageRequest::of(5, 0),
            Err(Error::InvalidPagination { size: 0 })
        );
        assert!(PageRequest::first(0).is_err());
    }

    #[test]
    fn test_next_page() {
        let p = PageRequest::first(10).unwrap();
        let n = p.next();
        assert_eq!(n.page, 1);
        assert_eq!(n.size, 10);
        assert_eq!(n.offset(), 10);
    }

    #[test]
    fn test_page_metadata() {
        let request = PageRequest::of(1, 3).unwrap();
        let page = Page::new(vec!["d", "e"], 5, &request);

        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_page() {
        let request = PageRequest::first(10).unwrap();
        let page: Page<u8> = Page::empty(&request);
        assert!(page.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_page_map() {
        let request = PageRequest::first(4).unwrap();
        let page = Page::new(vec![1, 2, 3], 3, &request);
        let doubled = page.map(|n| n * 2);
        assert_eq!(doubled.content, vec![2, 4, 6]);
        assert_eq!(doubled.total_elements, 3);
    }

    #[test]
    fn test_page_try_map_propagates_error() {
        let request = PageRequest::first(4).unwrap();
        let page = Page::new(vec![1, 2, 3], 3, &request);
        let result = page.try_map(|n| {
            if n == 2 {
                Err(Error::InvalidPagination { size: 0 })
            } else {
                Ok(n)
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_total_pages_rounding() {
        let request = PageRequest::first(10).unwrap();
        assert_eq!(Page::new(Vec::<u8>::new(), 10, &request).total_pages(), 1);
        assert_eq!(Page::new(Vec::<u8>::new(), 11, &request).total_pages(), 2);
        assert_eq!(Page::new(Vec::<u8>::new(), 20, &request).total_pages(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Consecutive windows are adjacent and non-overlapping.
            #[test]
            fn prop_windows_tile(page in 0usize..1_000, size in 1usize..1_000) {
                let request = PageRequest::of(page, size).unwrap();
                prop_assert_eq!(request.offset(), page * size);
                prop_assert_eq!(request.next().offset(), request.offset() + size);
            }

            /// total_pages always covers total_elements without overshoot.
            #[test]
            fn prop_total_pages_covers(total in 0u64..10_000, size in 1usize..100) {
                let request = PageRequest::first(size).unwrap();
                let page = Page::new(Vec::<u8>::new(), total, &request);
                let pages = page.total_pages();
                prop_assert!(pages * size as u64 >= total);
                prop_assert!(pages == 0 || (pages - 1) * (size as u64) < total);
            }
        }
    }
}
