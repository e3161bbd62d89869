//! Pagination arithmetic and the search response model.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// A validated 1-indexed pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// Validate a page request. Both values must be at least 1 and the page
    /// size may not exceed `max_page_size`.
    pub fn new(page: usize, page_size: usize, max_page_size: usize) -> DomainResult<Self> {
        if page < 1 {
            return Err(DomainError::InvalidPagination(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if page_size < 1 || page_size > max_page_size {
            return Err(DomainError::InvalidPagination(format!(
                "page_size must be between 1 and {max_page_size}, got {page_size}"
            )));
        }
        Ok(Self { page, page_size })
    }

    /// 1-indexed page number
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Maximum number of results on the page
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`, or 0 when there is nothing to page.
    pub const fn total_pages(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// Slice `items` down to this page.
    ///
    /// Fails with `PageNotFound` when the page lies past the last page of a
    /// non-empty set. An empty set yields an empty page for any page number.
    pub fn apply<T>(&self, items: Vec<T>) -> DomainResult<Page<T>> {
        let total = items.len();
        let total_pages = self.total_pages(total);

        if self.page > total_pages && total_pages > 0 {
            return Err(DomainError::PageNotFound {
                page: self.page,
                total_pages,
            });
        }

        let start = (self.page - 1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);

        let results = items.into_iter().skip(start).take(end - start).collect();

        Ok(Page {
            results,
            total,
            total_pages,
        })
    }
}

/// One page of an ordered result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page
    pub results: Vec<T>,
    /// Items across all pages
    pub total: usize,
    /// Number of pages
    pub total_pages: usize,
}

/// Response body of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Text of the matching messages on this page
    pub results: Vec<String>,
    /// Matches across all pages
    pub total: usize,
    /// 1-indexed page number
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// `ceil(total / page_size)`
    pub total_pages: usize,
}

impl SearchPage {
    /// Combine a sliced page with the pagination that produced it.
    pub fn from_page(page: Page<String>, pagination: Pagination) -> Self {
        Self {
            results: page.results,
            total: page.total,
            page: pagination.page(),
            page_size: pagination.page_size(),
            total_pages: page.total_pages,
        }
    }
}
