//! Auth session management: login, registration, OTP verification, and
//! the derived authentication state.
//!
//! The session keeps three things in sync on every transition: the
//! persistent [`TokenStore`], the [`ApiClient`]'s bearer-token slot, and an
//! in-memory session cache entry (current user + token). All three are
//! updated before a transition returns, so no request can race with a
//! half-applied token change.

pub mod storage;

use std::sync::{Arc, RwLock};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ProfileUpdate, RegisterRequest};
use crate::models::User;

pub use storage::{FileStore, MemoryStore, TokenStore};

/// Dev shortcut OTP; entering it verifies immediately without an explicit
/// submit action
pub const AUTO_VERIFY_OTP: &str = "112233";

pub const OTP_LENGTH: usize = 6;

/// What the OTP entry screen should do after a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpAction {
    /// Fewer than six digits entered
    Incomplete,
    /// Six digits entered; wait for the user to press submit
    AwaitConfirmation,
    /// The dev shortcut code; verify immediately
    Submit,
}

/// Decide whether an entered code auto-submits
pub fn otp_entry_action(code: &str) -> OtpAction {
    if code == AUTO_VERIFY_OTP {
        OtpAction::Submit
    } else if code.len() >= OTP_LENGTH {
        OtpAction::AwaitConfirmation
    } else {
        OtpAction::Incomplete
    }
}

/// Coarse authentication state, derived from the cached user record
/// rather than stored as its own flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    AuthenticatedUnverified,
    AuthenticatedVerified,
}

/// The in-memory "current session" entry
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub user: User,
    pub token: String,
}

/// Auth session over an [`ApiClient`] and a [`TokenStore`].
pub struct AuthSession {
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    session: RwLock<Option<SessionEntry>>,
}

impl AuthSession {
    pub fn new(client: ApiClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            client,
            store,
            session: RwLock::new(None),
        }
    }

    /// The API client this session keeps authenticated
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Restore a persisted session at app start. No network call: the
    /// stored token and user are trusted until a request says otherwise.
    /// Returns whether a session was restored.
    pub async fn hydrate(&self) -> Result<bool> {
        let token = self.store.get_token().await?;
        let user = self.store.get_user().await?;

        match (token, user) {
            (Some(token), Some(user)) => {
                debug!("restoring persisted session");
                self.client.set_token(Some(&token));
                *self.session.write().unwrap() = Some(SessionEntry { user, token });
                Ok(true)
            }
            _ => {
                debug!("no persisted session found");
                Ok(false)
            }
        }
    }

    /// Register a new account; the server sends an OTP to the phone.
    /// No session change until the OTP is verified.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<()> {
        self.client.register(payload).await?;
        info!(phone = %payload.phone, "registration submitted, awaiting OTP");
        Ok(())
    }

    pub async fn request_otp(&self, phone: &str) -> Result<()> {
        self.client.request_otp(phone).await?;
        Ok(())
    }

    /// Exchange phone + OTP for a token and user, establishing the session
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<User> {
        let payload = self.client.verify_otp(phone, otp).await?;
        self.establish(payload.token, payload.user.clone()).await?;
        info!("OTP verified, session established");
        Ok(payload.user)
    }

    /// Password login; same persistence sequence as OTP verification
    pub async fn login(&self, phone: &str, password: &str) -> Result<User> {
        let payload = self.client.login(phone, password).await?;
        self.establish(payload.token, payload.user.clone()).await?;
        info!("login successful, session established");
        Ok(payload.user)
    }

    /// Persist token + user and push them into the client slot and the
    /// session cache. Store first, then slot, then cache, so a crash
    /// mid-way leaves at worst a persisted-but-unapplied token that the
    /// next hydrate picks up.
    async fn establish(&self, token: String, user: User) -> Result<()> {
        self.store.set_token(&token).await?;
        self.store.set_user(&user).await?;
        self.client.set_token(Some(&token));
        *self.session.write().unwrap() = Some(SessionEntry { user, token });
        Ok(())
    }

    /// Update the profile; merges the returned user into store and cache.
    /// Requires an authenticated session.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        anyhow::ensure!(
            self.state() != AuthState::Unauthenticated,
            "cannot update profile without a session"
        );
        let user = self.client.update_profile(update).await?;
        self.store.set_user(&user).await?;
        if let Some(entry) = self.session.write().unwrap().as_mut() {
            entry.user = user.clone();
        }
        Ok(user)
    }

    /// Refetch the profile from the server. On success the store and
    /// cache are refreshed; on failure (typically an expired token) the
    /// whole local session is cleared without retry.
    pub async fn refresh_profile(&self) -> Result<User> {
        match self.client.get_profile().await {
            Ok(user) => {
                self.store.set_user(&user).await?;
                if let Some(entry) = self.session.write().unwrap().as_mut() {
                    entry.user = user.clone();
                }
                Ok(user)
            }
            Err(err) => {
                warn!("profile fetch failed, clearing local session: {err}");
                self.clear_local().await?;
                Err(err.into())
            }
        }
    }

    /// Log out. The server call is best-effort; the local session is
    /// cleared unconditionally.
    pub async fn logout(&self) -> Result<()> {
        if let Err(err) = self.client.logout().await {
            warn!("logout server call failed, clearing locally anyway: {err}");
        }
        self.clear_local().await
    }

    async fn clear_local(&self) -> Result<()> {
        self.store.clear_auth_data().await?;
        self.client.set_token(None);
        *self.session.write().unwrap() = None;
        Ok(())
    }

    /// Current coarse auth state, computed from the cached user's
    /// verified flag
    pub fn state(&self) -> AuthState {
        match self.session.read().unwrap().as_ref() {
            None => AuthState::Unauthenticated,
            Some(entry) if entry.user.is_verified => AuthState::AuthenticatedVerified,
            Some(_) => AuthState::AuthenticatedUnverified,
        }
    }

    /// Snapshot of the cached user, if a session exists
    pub fn current_user(&self) -> Option<User> {
        self.session
            .read()
            .unwrap()
            .as_ref()
            .map(|entry| entry.user.clone())
    }
}
