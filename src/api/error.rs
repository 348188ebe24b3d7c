//! Error taxonomy for marketplace API operations.

use thiserror::Error;

/// Common error type for all backend and storage-endpoint calls.
///
/// Four kinds, matching how the UI layer reacts to them:
/// - `Network`: no response reached us at all (timeout, refused, DNS)
/// - `Server`: the backend answered with an HTTP error and a message
/// - `Validation`: client-side field checks failed before any request
/// - `AuthExpired`: a 401 that already cleared the local token slot
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to reach the server, check the internet connection")]
    Network,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("session expired, sign in again")]
    AuthExpired,
}

impl ApiError {
    /// HTTP status of a server-reported error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::AuthExpired => Some(401),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network)
    }
}
