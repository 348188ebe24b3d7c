//! Client SDK for the Qafzh solar marketplace.
//!
//! Everything a frontend needs to talk to the marketplace backend:
//! - a typed [`api::ApiClient`] over the REST API with a shared
//!   bearer-token slot
//! - [`auth::AuthSession`] keeping the persisted token store, the client
//!   token, and the in-memory session in sync
//! - paginated [`marketplace`] feeds for products, engineers, and shops
//! - debounced, partial-failure-tolerant [`search`] across all entities
//! - the image [`upload`] client and the all-or-nothing [`submit`] flow

pub mod api;
pub mod auth;
pub mod marketplace;
pub mod models;
pub mod search;
pub mod submit;
pub mod upload;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthSession, AuthState};
