//! Unified free-text search across products, engineers, shops, and ads.
//!
//! The four sub-searches run concurrently and tolerate partial failure: a
//! branch that errors degrades to an empty result set and a logged
//! warning, never failing the aggregate. Stale results are not kept
//! across keyword changes; every stabilized keyword produces a fresh
//! result set.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::api::{ApiClient, ApiError, EngineerFilter, ProductFilter, ShopFilter};
use crate::marketplace::PAGE_SIZE;
use crate::models::{Ad, Engineer, Page, Product, Shop};

/// Quiet period a keyword must hold before a search fires
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Collapses a stream of keyword edits into stabilized values: a value is
/// yielded only after no newer edit arrives for [`DEBOUNCE_QUIET_PERIOD`].
pub struct Debouncer {
    rx: mpsc::UnboundedReceiver<String>,
    quiet_period: Duration,
}

impl Debouncer {
    /// A sender for keyword edits and the debouncer that consumes them
    pub fn channel() -> (mpsc::UnboundedSender<String>, Self) {
        Self::with_quiet_period(DEBOUNCE_QUIET_PERIOD)
    }

    pub fn with_quiet_period(quiet_period: Duration) -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx, quiet_period })
    }

    /// Next stabilized keyword, or `None` once the sender is dropped with
    /// nothing pending
    pub async fn next_stable(&mut self) -> Option<String> {
        let mut latest = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.quiet_period, self.rx.recv()).await {
                // a newer edit arrived before the quiet period elapsed
                Ok(Some(value)) => latest = value,
                // sender closed; flush the last value
                Ok(None) => return Some(latest),
                // quiet period elapsed
                Err(_) => return Some(latest),
            }
        }
    }
}

/// One branch of a unified search: either hits, or an empty set with the
/// failure recorded
#[derive(Debug)]
pub struct SearchOutcome<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub failed: bool,
}

impl<T> Default for SearchOutcome<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            failed: false,
        }
    }
}

impl<T> SearchOutcome<T> {
    fn from_result(entity: &str, result: Result<Page<T>, ApiError>) -> Self {
        match result {
            Ok(page) => Self {
                items: page.data,
                total: page.total,
                failed: false,
            },
            Err(err) => {
                warn!(entity, "search branch failed: {err}");
                Self {
                    failed: true,
                    ..Self::default()
                }
            }
        }
    }
}

/// Per-entity results of one unified search
#[derive(Debug, Default)]
pub struct UnifiedSearchResults {
    pub products: SearchOutcome<Product>,
    pub engineers: SearchOutcome<Engineer>,
    pub shops: SearchOutcome<Shop>,
    pub ads: SearchOutcome<Ad>,
}

impl UnifiedSearchResults {
    /// Whether every branch came back empty (regardless of failures)
    pub fn is_empty(&self) -> bool {
        self.products.items.is_empty()
            && self.engineers.items.is_empty()
            && self.shops.items.is_empty()
            && self.ads.items.is_empty()
    }
}

/// Search all four entity types for a keyword, first page each.
///
/// An empty or whitespace keyword returns empty results without issuing
/// any request.
pub async fn unified_search(client: &ApiClient, keyword: &str) -> UnifiedSearchResults {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return UnifiedSearchResults::default();
    }

    let product_filter = ProductFilter::with_keyword(keyword);
    let engineer_filter = EngineerFilter::with_keyword(keyword);
    let shop_filter = ShopFilter::with_keyword(keyword);

    let (products, engineers, shops, ads) = tokio::join!(
        client.search_products(&product_filter, 1, PAGE_SIZE),
        client.search_engineers(&engineer_filter, 1, PAGE_SIZE),
        client.search_shops(&shop_filter, 1, PAGE_SIZE),
        client.search_ads(keyword, 1, PAGE_SIZE),
    );

    UnifiedSearchResults {
        products: SearchOutcome::from_result("products", products),
        engineers: SearchOutcome::from_result("engineers", engineers),
        shops: SearchOutcome::from_result("shops", shops),
        ads: SearchOutcome::from_result("ads", ads),
    }
}
