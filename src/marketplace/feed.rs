//! Page accumulation for incrementally loaded lists.

use tracing::warn;

use crate::models::Page;

/// Items per page for every marketplace list
pub const PAGE_SIZE: u32 = 10;

/// Accumulates flattened items across pages of one filter's result
/// sequence.
///
/// Page application is monotonic: a page is applied only when it is the
/// expected next page. A stale or out-of-order response (a slow page 1
/// arriving after page 2, a duplicate retry) is dropped with a warning
/// instead of corrupting the accumulated order.
#[derive(Debug)]
pub struct PagedFeed<T> {
    items: Vec<T>,
    current_page: u32,
    total_pages: u32,
    total: u64,
}

impl<T> Default for PagedFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PagedFeed<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            total_pages: 1,
            total: 0,
        }
    }

    /// The page number to request next, or `None` when the last known
    /// page has been reached
    pub fn next_page(&self) -> Option<u32> {
        if self.current_page == 0 {
            Some(1)
        } else if self.current_page < self.total_pages {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    /// Apply a fetched page. Returns `false` when the page was rejected
    /// for arriving out of order.
    pub fn apply_page(&mut self, page: Page<T>) -> bool {
        let expected = self.current_page + 1;
        if page.current_page != expected {
            warn!(
                got = page.current_page,
                expected, "dropping out-of-order page"
            );
            return false;
        }
        self.items.extend(page.data);
        self.current_page = page.current_page;
        self.total_pages = page.total_pages.max(1);
        self.total = page.total;
        true
    }

    /// Discard all accumulated items and start a fresh page sequence
    pub fn reset(&mut self) {
        self.items.clear();
        self.current_page = 0;
        self.total_pages = 1;
        self.total = 0;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total item count reported by the server, across all pages
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
