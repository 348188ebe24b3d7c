//! Filter and pagination parameters for the browse/search endpoints.
//!
//! The backend takes an open-ended query string; on this side every
//! recognized key is an explicit struct field so a typo cannot silently
//! produce an unfiltered query.

use serde::{Deserialize, Serialize};

use crate::models::{Condition, ListingStatus, ProductType};

/// Results ordering for product listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl SortKey {
    /// (sortBy, sortOrder) wire pair; `Newest` is the backend default and
    /// sends nothing
    fn query_pair(&self) -> Option<(&'static str, &'static str)> {
        match self {
            SortKey::Newest => None,
            SortKey::PriceAsc => Some(("price", "asc")),
            SortKey::PriceDesc => Some(("price", "desc")),
            SortKey::Name => Some(("name", "asc")),
        }
    }
}

/// Filter set for product browsing and search
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub keyword: Option<String>,
    pub product_type: Option<ProductType>,
    pub condition: Option<Condition>,
    pub governorate: Option<String>,
    pub city: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: Option<SortKey>,
    /// Moderation state to browse; the marketplace only shows approved
    /// listings
    pub status: Option<ListingStatus>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            keyword: None,
            product_type: None,
            condition: None,
            governorate: None,
            city: None,
            price_min: None,
            price_max: None,
            sort: None,
            status: Some(ListingStatus::Approved),
        }
    }
}

impl ProductFilter {
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }

    /// A non-empty keyword routes the request to the search endpoint
    pub fn has_keyword(&self) -> bool {
        self.keyword
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }

    /// Whether this filter requires the search endpoint rather than the
    /// plain browse endpoint
    pub fn is_search(&self) -> bool {
        self.has_keyword()
            || self.product_type.is_some()
            || self.condition.is_some()
            || self.governorate.is_some()
            || self.city.is_some()
            || self.price_min.is_some()
            || self.price_max.is_some()
    }

    pub(crate) fn to_query(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(keyword) = self.keyword.as_deref() {
            if !keyword.trim().is_empty() {
                params.push(("search_keyword", keyword.trim().to_string()));
            }
        }
        if let Some(product_type) = self.product_type {
            params.push(("type", product_type.as_str().to_string()));
        }
        if let Some(condition) = self.condition {
            params.push(("condition", condition.as_str().to_string()));
        }
        if let Some(governorate) = self.governorate.as_deref() {
            params.push(("governorate", governorate.to_string()));
        }
        if let Some(city) = self.city.as_deref() {
            params.push(("city", city.to_string()));
        }
        if let Some(min) = self.price_min {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.price_max {
            params.push(("maxPrice", max.to_string()));
        }
        if let Some((sort_by, sort_order)) = self.sort.and_then(|s| s.query_pair()) {
            params.push(("sortBy", sort_by.to_string()));
            params.push(("sortOrder", sort_order.to_string()));
        }
        if let Some(status) = self.status {
            let value = match status {
                ListingStatus::Pending => "pending",
                ListingStatus::Approved => "approved",
            };
            params.push(("status", value.to_string()));
        }
        params
    }
}

/// Filter set for the engineer directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineerFilter {
    pub keyword: Option<String>,
    pub governorate: Option<String>,
    pub city: Option<String>,
    pub specialization: Option<String>,
}

impl EngineerFilter {
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }

    pub fn has_keyword(&self) -> bool {
        self.keyword
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }

    pub(crate) fn to_query(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(keyword) = self.keyword.as_deref() {
            if !keyword.trim().is_empty() {
                params.push(("search_keyword", keyword.trim().to_string()));
            }
        }
        if let Some(governorate) = self.governorate.as_deref() {
            params.push(("governorate", governorate.to_string()));
        }
        if let Some(city) = self.city.as_deref() {
            params.push(("city", city.to_string()));
        }
        if let Some(specialization) = self.specialization.as_deref() {
            params.push(("specialization", specialization.to_string()));
        }
        params
    }
}

/// Filter set for the shop directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopFilter {
    pub keyword: Option<String>,
    pub governorate: Option<String>,
    pub city: Option<String>,
    pub service: Option<String>,
}

impl ShopFilter {
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }

    pub fn has_keyword(&self) -> bool {
        self.keyword
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }

    pub(crate) fn to_query(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(keyword) = self.keyword.as_deref() {
            if !keyword.trim().is_empty() {
                params.push(("search_keyword", keyword.trim().to_string()));
            }
        }
        if let Some(governorate) = self.governorate.as_deref() {
            params.push(("governorate", governorate.to_string()));
        }
        if let Some(city) = self.city.as_deref() {
            params.push(("city", city.to_string()));
        }
        if let Some(service) = self.service.as_deref() {
            params.push(("service", service.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_product_filter_is_not_search() {
        let filter = ProductFilter::default();
        assert!(!filter.is_search());
        let query = filter.to_query(1, 10);
        assert!(query.contains(&("status", "approved".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "search_keyword"));
    }

    #[test]
    fn whitespace_keyword_does_not_route_to_search() {
        let filter = ProductFilter::with_keyword("   ");
        assert!(!filter.is_search());
    }

    #[test]
    fn keyword_and_bounds_build_query() {
        let filter = ProductFilter {
            keyword: Some("inverter".to_string()),
            price_min: Some(0.0),
            price_max: Some(500.0),
            sort: Some(SortKey::PriceDesc),
            ..Default::default()
        };
        assert!(filter.is_search());
        let query = filter.to_query(2, 10);
        assert!(query.contains(&("page", "2".to_string())));
        assert!(query.contains(&("search_keyword", "inverter".to_string())));
        assert!(query.contains(&("minPrice", "0".to_string())));
        assert!(query.contains(&("maxPrice", "500".to_string())));
        assert!(query.contains(&("sortBy", "price".to_string())));
        assert!(query.contains(&("sortOrder", "desc".to_string())));
    }

    #[test]
    fn type_filter_alone_routes_to_search() {
        let filter = ProductFilter {
            product_type: Some(ProductType::Panel),
            ..Default::default()
        };
        assert!(filter.is_search());
    }
}
