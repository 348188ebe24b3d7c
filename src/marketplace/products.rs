//! Incrementally loadable product listings.

use tracing::debug;

use crate::api::{ApiClient, ApiError, ProductFilter};
use crate::marketplace::feed::{PagedFeed, PAGE_SIZE};
use crate::models::{Page, Product};

/// Which endpoint family backs the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductSource {
    /// Public marketplace browse/search
    Marketplace,
    /// Listings owned by the authenticated user (token-scoped)
    UserProducts,
}

/// Paginated product list for one filter.
///
/// A non-empty keyword or any non-default filter routes requests to the
/// search endpoint; otherwise the plain browse endpoint is used. Both
/// return the same page shape, so accumulation does not care which one
/// answered.
pub struct ProductFeed {
    client: ApiClient,
    filter: ProductFilter,
    source: ProductSource,
    feed: PagedFeed<Product>,
}

impl ProductFeed {
    pub fn new(client: ApiClient, filter: ProductFilter) -> Self {
        Self {
            client,
            filter,
            source: ProductSource::Marketplace,
            feed: PagedFeed::new(),
        }
    }

    /// Feed over the authenticated user's own listings
    pub fn user_products(client: ApiClient) -> Self {
        Self {
            client,
            filter: ProductFilter::default(),
            source: ProductSource::UserProducts,
            feed: PagedFeed::new(),
        }
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Swap the filter. A changed filter starts a fresh page sequence;
    /// items accumulated for the old filter are discarded. Setting an
    /// identical filter keeps the current sequence.
    pub fn set_filter(&mut self, filter: ProductFilter) {
        if filter != self.filter {
            debug!("product filter changed, resetting feed");
            self.filter = filter;
            self.feed.reset();
        }
    }

    /// Fetch and apply the next page. A no-op returning `Ok(false)` once
    /// the last known page has been reached.
    pub async fn fetch_next_page(&mut self) -> Result<bool, ApiError> {
        let Some(page_no) = self.feed.next_page() else {
            return Ok(false);
        };
        let page = self.fetch(page_no).await?;
        Ok(self.feed.apply_page(page))
    }

    async fn fetch(&self, page_no: u32) -> Result<Page<Product>, ApiError> {
        match self.source {
            ProductSource::UserProducts => self.client.user_products(page_no, PAGE_SIZE).await,
            ProductSource::Marketplace if self.filter.is_search() => {
                self.client
                    .search_products(&self.filter, page_no, PAGE_SIZE)
                    .await
            }
            ProductSource::Marketplace => {
                self.client
                    .browse_products(&self.filter, page_no, PAGE_SIZE)
                    .await
            }
        }
    }

    /// Pull-to-refresh: discard everything and load page 1 again
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.feed.reset();
        self.fetch_next_page().await.map(|_| ())
    }

    pub fn products(&self) -> &[Product] {
        self.feed.items()
    }

    pub fn total_count(&self) -> u64 {
        self.feed.total()
    }

    pub fn has_next_page(&self) -> bool {
        self.feed.has_next_page()
    }
}
