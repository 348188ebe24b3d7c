//! Incrementally loadable shop directory.

use tracing::debug;

use crate::api::{ApiClient, ApiError, ShopFilter};
use crate::marketplace::feed::{PagedFeed, PAGE_SIZE};
use crate::models::{Page, Shop};

/// Paginated shop list for one filter; a non-empty keyword routes to the
/// search endpoint.
pub struct ShopFeed {
    client: ApiClient,
    filter: ShopFilter,
    feed: PagedFeed<Shop>,
}

impl ShopFeed {
    pub fn new(client: ApiClient, filter: ShopFilter) -> Self {
        Self {
            client,
            filter,
            feed: PagedFeed::new(),
        }
    }

    pub fn filter(&self) -> &ShopFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ShopFilter) {
        if filter != self.filter {
            debug!("shop filter changed, resetting feed");
            self.filter = filter;
            self.feed.reset();
        }
    }

    pub async fn fetch_next_page(&mut self) -> Result<bool, ApiError> {
        let Some(page_no) = self.feed.next_page() else {
            return Ok(false);
        };
        let page = self.fetch(page_no).await?;
        Ok(self.feed.apply_page(page))
    }

    async fn fetch(&self, page_no: u32) -> Result<Page<Shop>, ApiError> {
        if self.filter.has_keyword() {
            self.client
                .search_shops(&self.filter, page_no, PAGE_SIZE)
                .await
        } else {
            self.client
                .list_shops(&self.filter, page_no, PAGE_SIZE)
                .await
        }
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.feed.reset();
        self.fetch_next_page().await.map(|_| ())
    }

    pub fn shops(&self) -> &[Shop] {
        self.feed.items()
    }

    pub fn total_count(&self) -> u64 {
        self.feed.total()
    }

    pub fn has_next_page(&self) -> bool {
        self.feed.has_next_page()
    }
}
