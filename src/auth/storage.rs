//! Persistent storage for the auth token and cached user record.
//!
//! Three values live here: the bearer token, the user snapshot, and a
//! refresh token (written by the backend contract but unused by current
//! flows). They are always cleared together on logout.

use std::path::{Path, PathBuf};
use std::sync::Mutex as StdMutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::User;

/// Everything the store persists, as one record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AuthRecord {
    #[serde(default)]
    auth_token: Option<String>,
    #[serde(default)]
    user_data: Option<User>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Async key-value storage for auth state.
///
/// Writes are infrequent (login/logout/profile refresh) and reads are
/// request-scoped; no concurrency control is needed beyond each backend's
/// own atomicity.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn set_token(&self, token: &str) -> Result<()>;
    async fn get_token(&self) -> Result<Option<String>>;

    async fn set_user(&self, user: &User) -> Result<()>;
    async fn get_user(&self) -> Result<Option<User>>;

    async fn set_refresh_token(&self, token: &str) -> Result<()>;
    async fn get_refresh_token(&self) -> Result<Option<String>>;

    /// Remove token, user record, and refresh token together
    async fn clear_auth_data(&self) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    record: StdMutex<AuthRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn set_token(&self, token: &str) -> Result<()> {
        self.record.lock().unwrap().auth_token = Some(token.to_string());
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>> {
        Ok(self.record.lock().unwrap().auth_token.clone())
    }

    async fn set_user(&self, user: &User) -> Result<()> {
        self.record.lock().unwrap().user_data = Some(user.clone());
        Ok(())
    }

    async fn get_user(&self) -> Result<Option<User>> {
        Ok(self.record.lock().unwrap().user_data.clone())
    }

    async fn set_refresh_token(&self, token: &str) -> Result<()> {
        self.record.lock().unwrap().refresh_token = Some(token.to_string());
        Ok(())
    }

    async fn get_refresh_token(&self) -> Result<Option<String>> {
        Ok(self.record.lock().unwrap().refresh_token.clone())
    }

    async fn clear_auth_data(&self) -> Result<()> {
        *self.record.lock().unwrap() = AuthRecord::default();
        Ok(())
    }
}

/// JSON-file-backed store under an app-namespaced path.
///
/// The whole record is rewritten on every mutation; a mutex serializes the
/// read-modify-write cycle so interleaved writers cannot drop each other's
/// fields.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at the platform data directory (`…/qafzh/auth.json`)
    pub fn default_path() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("No platform data directory available")?
            .join("qafzh");
        Ok(Self::new(dir.join("auth.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_record(&self) -> Result<AuthRecord> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).context("Failed to parse stored auth data")
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AuthRecord::default()),
            Err(err) => Err(err).context("Failed to read auth store"),
        }
    }

    async fn write_record(&self, record: &AuthRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create auth store directory")?;
        }
        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&self.path, json)
            .await
            .context("Failed to write auth store")?;
        debug!(path = %self.path.display(), "auth store written");
        Ok(())
    }

    async fn update(&self, apply: impl FnOnce(&mut AuthRecord)) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut record = self.read_record().await?;
        apply(&mut record);
        self.write_record(&record).await
    }
}

#[async_trait]
impl TokenStore for FileStore {
    async fn set_token(&self, token: &str) -> Result<()> {
        let token = token.to_string();
        self.update(|record| record.auth_token = Some(token)).await
    }

    async fn get_token(&self) -> Result<Option<String>> {
        Ok(self.read_record().await?.auth_token)
    }

    async fn set_user(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.update(|record| record.user_data = Some(user)).await
    }

    async fn get_user(&self) -> Result<Option<User>> {
        Ok(self.read_record().await?.user_data)
    }

    async fn set_refresh_token(&self, token: &str) -> Result<()> {
        let token = token.to_string();
        self.update(|record| record.refresh_token = Some(token))
            .await
    }

    async fn get_refresh_token(&self) -> Result<Option<String>> {
        Ok(self.read_record().await?.refresh_token)
    }

    async fn clear_auth_data(&self) -> Result<()> {
        self.update(|record| *record = AuthRecord::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_str(r#"{"id": "u1", "phone": "+967700000000"}"#).unwrap()
    }

    #[tokio::test]
    async fn memory_store_clears_everything_together() {
        let store = MemoryStore::new();
        store.set_token("tok").await.unwrap();
        store.set_user(&sample_user()).await.unwrap();
        store.set_refresh_token("refresh").await.unwrap();

        store.clear_auth_data().await.unwrap();

        assert!(store.get_token().await.unwrap().is_none());
        assert!(store.get_user().await.unwrap().is_none());
        assert!(store.get_refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("auth.json"));

        store.set_token("tok-123").await.unwrap();
        store.set_user(&sample_user()).await.unwrap();

        assert_eq!(store.get_token().await.unwrap().as_deref(), Some("tok-123"));
        assert_eq!(
            store.get_user().await.unwrap().map(|u| u.phone),
            Some("+967700000000".to_string())
        );
    }

    #[tokio::test]
    async fn file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));
        assert!(store.get_token().await.unwrap().is_none());
    }
}
