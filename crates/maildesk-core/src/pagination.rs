//! Offset/limit pagination.

use serde::{Deserialize, Serialize};

use crate::model::EmailSummary;

/// Emails per page unless settings say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Offset for a 1-based page number. Page 0 is treated as page 1.
#[must_use]
pub const fn offset_for(page: u32, limit: u32) -> u64 {
    let page = if page == 0 { 0 } else { page - 1 };
    page as u64 * limit as u64
}

/// Number of pages needed to show `count` items, `page_size` per page.
#[must_use]
pub const fn page_count(count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size as u64)
}

/// Paginated response envelope.
///
/// `next` and `previous` are opaque links; only their presence matters to
/// the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationData<T = EmailSummary> {
    /// Total number of items across all pages.
    pub count: u64,
    /// Link to the next page.
    pub next: Option<String>,
    /// Link to the previous page.
    pub previous: Option<String>,
    /// Items on this page.
    pub results: Vec<T>,
}

impl<T> Default for PaginationData<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> PaginationData<T> {
    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Page count for this envelope's total.
    #[must_use]
    pub const fn page_count(&self, page_size: u32) -> u64 {
        page_count(self.count, page_size)
    }
}
