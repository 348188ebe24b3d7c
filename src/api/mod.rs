//! Typed HTTP client for the marketplace backend (`/api/v1`).
//!
//! One method per backend operation. The client owns a single bearer-token
//! slot applied as a default header to every outgoing request; the slot is
//! mutated only through [`ApiClient::set_token`], never read back from
//! persistent storage per request.

pub mod error;
pub mod params;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use error::ApiError;
pub use params::{EngineerFilter, ProductFilter, ShopFilter, SortKey};

use crate::models::governorates::RemoteGovernorate;
use crate::models::{Ad, Engineer, Envelope, NewProduct, Page, Product, Shop, User};

/// Fixed client-side request timeout, after which a call fails as a
/// network error
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Login / OTP-verification response payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Profile endpoints wrap the user one level deeper than auth endpoints
#[derive(Debug, Clone, Deserialize)]
struct ProfileData {
    user: User,
}

/// Registration payload; the server responds by sending an OTP to the
/// phone number
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub phone: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Partial profile update; unset fields are left untouched server-side
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the marketplace REST backend.
///
/// Cheap to clone; clones share the HTTP connection pool and the token
/// slot, so a token set through any clone applies to all of them.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the given base URL (`…/api/v1`, no trailing
    /// slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token applied to subsequent requests.
    /// `None` removes the Authorization header entirely.
    pub fn set_token(&self, token: Option<&str>) {
        let mut slot = self.token.write().expect("token slot poisoned");
        *slot = token.map(str::to_string);
        debug!(present = slot.is_some(), "api token updated");
    }

    /// Current token, if one is set
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token slot poisoned").clone()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, url);
        if let Some(token) = self.token.read().expect("token slot poisoned").as_deref() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request and surface the response body as raw JSON.
    ///
    /// A 401 clears the token slot before returning; there is no retry
    /// path, so the clear happens exactly once per originating request.
    /// Redirecting to login is the caller's job.
    async fn send_raw(&self, req: RequestBuilder) -> Result<serde_json::Value, ApiError> {
        let response = req.send().await.map_err(|err| {
            warn!("network error: {err}");
            ApiError::Network
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("token rejected (401), clearing api token slot");
            self.set_token(None);
            return Err(ApiError::AuthExpired);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("server returned {}", status));
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|err| {
            warn!("malformed response body: {err}");
            ApiError::Server {
                status: status.as_u16(),
                message: "malformed server response".to_string(),
            }
        })
    }

    /// Send and unwrap the `{status, message, data}` envelope
    async fn send_data<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(req).await?;
        let envelope: Envelope<T> =
            serde_json::from_value(body).map_err(|err| ApiError::Server {
                status: 200,
                message: format!("unexpected response shape: {err}"),
            })?;
        Ok(envelope.data)
    }

    /// Send and parse a paginated list body (`data` + page counters at
    /// the top level)
    async fn send_page<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<Page<T>, ApiError> {
        let body = self.send_raw(req).await?;
        serde_json::from_value(body).map_err(|err| ApiError::Server {
            status: 200,
            message: format!("unexpected page shape: {err}"),
        })
    }

    /// Send, discarding any body beyond error handling
    async fn send_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.send_raw(req).await.map(|_| ())
    }

    // ── Auth ────────────────────────────────────────────────────────

    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "/auth/register").json(payload))
            .await
    }

    pub async fn request_otp(&self, phone: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "phone": phone });
        self.send_unit(self.request(Method::POST, "/auth/request-otp").json(&body))
            .await
    }

    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<AuthPayload, ApiError> {
        let body = serde_json::json!({ "otp": otp });
        self.send_data(
            self.request(Method::POST, &format!("/auth/verify-otp/{phone}"))
                .json(&body),
        )
        .await
    }

    pub async fn login(&self, phone: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let body = serde_json::json!({ "phone": phone, "password": password });
        self.send_data(self.request(Method::POST, "/auth/login").json(&body))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "/auth/logout"))
            .await
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let data: ProfileData = self
            .send_data(self.request(Method::GET, "/auth/profile"))
            .await?;
        Ok(data.user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let data: ProfileData = self
            .send_data(
                self.request(Method::PUT, "/auth/update-profile")
                    .json(update),
            )
            .await?;
        Ok(data.user)
    }

    // ── Products ────────────────────────────────────────────────────

    pub async fn browse_products(
        &self,
        filter: &ProductFilter,
        page: u32,
        limit: u32,
    ) -> Result<Page<Product>, ApiError> {
        self.send_page(
            self.request(Method::GET, "/marketplace/browse-products")
                .query(&filter.to_query(page, limit)),
        )
        .await
    }

    pub async fn search_products(
        &self,
        filter: &ProductFilter,
        page: u32,
        limit: u32,
    ) -> Result<Page<Product>, ApiError> {
        self.send_page(
            self.request(Method::GET, "/marketplace/search-products")
                .query(&filter.to_query(page, limit)),
        )
        .await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        self.send_data(self.request(Method::GET, &format!("/marketplace/getOneProduct/{id}")))
            .await
    }

    pub async fn create_product(&self, listing: &NewProduct) -> Result<Product, ApiError> {
        self.send_data(self.request(Method::POST, "/products/post").json(listing))
            .await
    }

    /// Listings owned by the authenticated user; the backend resolves the
    /// owner from the token, no user id is sent
    pub async fn user_products(&self, page: u32, limit: u32) -> Result<Page<Product>, ApiError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        self.send_page(
            self.request(Method::GET, "/products/user-products")
                .query(&query),
        )
        .await
    }

    pub async fn update_product(
        &self,
        id: &str,
        listing: &NewProduct,
    ) -> Result<Product, ApiError> {
        self.send_data(
            self.request(Method::PATCH, &format!("/products/update-products/{id}"))
                .json(listing),
        )
        .await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/products/delete-product/{id}")))
            .await
    }

    pub async fn like_product(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, &format!("/products/{id}/like")))
            .await
    }

    pub async fn unlike_product(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, &format!("/products/{id}/like")))
            .await
    }

    // ── Engineers ───────────────────────────────────────────────────

    pub async fn list_engineers(
        &self,
        filter: &EngineerFilter,
        page: u32,
        limit: u32,
    ) -> Result<Page<Engineer>, ApiError> {
        self.send_page(
            self.request(Method::GET, "/marketplace/getAllEngineer")
                .query(&filter.to_query(page, limit)),
        )
        .await
    }

    pub async fn search_engineers(
        &self,
        filter: &EngineerFilter,
        page: u32,
        limit: u32,
    ) -> Result<Page<Engineer>, ApiError> {
        self.send_page(
            self.request(Method::GET, "/marketplace/filters-engineer")
                .query(&filter.to_query(page, limit)),
        )
        .await
    }

    pub async fn get_engineer(&self, id: &str) -> Result<Engineer, ApiError> {
        self.send_data(self.request(Method::GET, &format!("/marketplace/getOneEngineer/{id}")))
            .await
    }

    // ── Shops ───────────────────────────────────────────────────────

    pub async fn list_shops(
        &self,
        filter: &ShopFilter,
        page: u32,
        limit: u32,
    ) -> Result<Page<Shop>, ApiError> {
        self.send_page(
            self.request(Method::GET, "/marketplace/getAllShops")
                .query(&filter.to_query(page, limit)),
        )
        .await
    }

    pub async fn search_shops(
        &self,
        filter: &ShopFilter,
        page: u32,
        limit: u32,
    ) -> Result<Page<Shop>, ApiError> {
        self.send_page(
            self.request(Method::GET, "/marketplace/filters-shop")
                .query(&filter.to_query(page, limit)),
        )
        .await
    }

    pub async fn get_shop(&self, id: &str) -> Result<Shop, ApiError> {
        self.send_data(self.request(Method::GET, &format!("/marketplace/getOneShop/{id}")))
            .await
    }

    // ── Ads ─────────────────────────────────────────────────────────

    pub async fn list_ads(&self, page: u32, limit: u32) -> Result<Page<Ad>, ApiError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        self.send_page(
            self.request(Method::GET, "/marketplace/getAllAds")
                .query(&query),
        )
        .await
    }

    pub async fn search_ads(
        &self,
        keyword: &str,
        page: u32,
        limit: u32,
    ) -> Result<Page<Ad>, ApiError> {
        let query = [
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("search_keyword", keyword.trim().to_string()),
        ];
        self.send_page(
            self.request(Method::GET, "/marketplace/filters-ads")
                .query(&query),
        )
        .await
    }

    // ── Reference data ──────────────────────────────────────────────

    pub async fn governorate_data(&self) -> Result<Vec<RemoteGovernorate>, ApiError> {
        self.send_data(self.request(Method::GET, "/marketplace/get/governorate-data"))
            .await
    }
}
