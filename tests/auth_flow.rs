//! End-to-end auth transitions: login persistence, logout, hydration, and
//! the expired-token path.

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use qafzh_market::api::ApiClient;
use qafzh_market::auth::{AuthSession, AuthState, FileStore, MemoryStore, TokenStore};

fn user_json(verified: bool) -> serde_json::Value {
    json!({
        "_id": "u1",
        "phone": "+967700000000",
        "name": "Salim",
        "isVerified": verified
    })
}

fn login_body(token: &str, verified: bool) -> serde_json::Value {
    json!({
        "status": 200,
        "message": "ok",
        "data": { "token": token, "user": user_json(verified) }
    })
}

fn session_with_file_store(server: &MockServer, dir: &tempfile::TempDir) -> AuthSession {
    let client = ApiClient::new(server.base_url()).unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("auth.json")));
    AuthSession::new(client, store)
}

#[tokio::test]
async fn login_persists_the_token_and_applies_it_to_the_client() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({ "phone": "+967700000000", "password": "secret" }));
        then.status(200).json_body(login_body("tok-login", true));
    });

    let dir = tempfile::tempdir().unwrap();
    let session = session_with_file_store(&server, &dir);

    let user = session.login("+967700000000", "secret").await.unwrap();
    assert!(user.is_verified);
    assert_eq!(session.state(), AuthState::AuthenticatedVerified);
    assert_eq!(session.client().token().as_deref(), Some("tok-login"));

    // the exact token landed in the persistent store
    let store = FileStore::new(dir.path().join("auth.json"));
    assert_eq!(store.get_token().await.unwrap().as_deref(), Some("tok-login"));
    assert!(store.get_user().await.unwrap().is_some());
}

#[tokio::test]
async fn otp_verification_establishes_an_unverified_session_as_is() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/auth/verify-otp/+967700000000")
            .json_body(json!({ "otp": "112233" }));
        then.status(200).json_body(login_body("tok-otp", false));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let session = AuthSession::new(client, Arc::new(MemoryStore::new()));

    session.verify_otp("+967700000000", "112233").await.unwrap();
    assert_eq!(session.state(), AuthState::AuthenticatedUnverified);
}

#[tokio::test]
async fn hydrate_restores_a_persisted_session_without_network() {
    // no mock server involved at all
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("auth.json")));
    store.set_token("tok-old").await.unwrap();
    store
        .set_user(&serde_json::from_value(user_json(true)).unwrap())
        .await
        .unwrap();

    let session = AuthSession::new(client, store);
    assert!(session.hydrate().await.unwrap());

    assert_eq!(session.state(), AuthState::AuthenticatedVerified);
    assert_eq!(session.client().token().as_deref(), Some("tok-old"));
    assert_eq!(session.current_user().unwrap().phone, "+967700000000");
}

#[tokio::test]
async fn hydrate_with_an_empty_store_restores_nothing() {
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let session = AuthSession::new(client, Arc::new(MemoryStore::new()));
    assert!(!session.hydrate().await.unwrap());
    assert_eq!(session.state(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn logout_clears_locally_even_when_the_server_call_fails() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(login_body("tok-1", true));
    });
    server.mock(|when, then| {
        when.method(POST).path("/auth/logout");
        then.status(500).json_body(json!({ "message": "oops" }));
    });

    let dir = tempfile::tempdir().unwrap();
    let session = session_with_file_store(&server, &dir);
    session.login("+967700000000", "secret").await.unwrap();

    session.logout().await.unwrap();

    assert_eq!(session.state(), AuthState::Unauthenticated);
    assert!(session.client().token().is_none());
    let store = FileStore::new(dir.path().join("auth.json"));
    assert!(store.get_token().await.unwrap().is_none());
    assert!(store.get_user().await.unwrap().is_none());
}

#[tokio::test]
async fn refresh_profile_failure_clears_the_whole_local_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(login_body("tok-stale", true));
    });
    server.mock(|when, then| {
        when.method(GET).path("/auth/profile");
        then.status(401).json_body(json!({ "message": "jwt expired" }));
    });

    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(server.base_url()).unwrap();
    let session = AuthSession::new(client, store.clone());
    session.login("+967700000000", "secret").await.unwrap();

    assert!(session.refresh_profile().await.is_err());

    assert_eq!(session.state(), AuthState::Unauthenticated);
    assert!(session.client().token().is_none());
    assert!(store.get_token().await.unwrap().is_none());
}

#[tokio::test]
async fn refresh_profile_success_updates_the_cached_user() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(login_body("tok-1", false));
    });
    server.mock(|when, then| {
        when.method(GET).path("/auth/profile");
        then.status(200).json_body(json!({
            "status": 200,
            "message": "ok",
            "data": { "user": user_json(true) }
        }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let session = AuthSession::new(client, Arc::new(MemoryStore::new()));
    session.login("+967700000000", "secret").await.unwrap();
    assert_eq!(session.state(), AuthState::AuthenticatedUnverified);

    // the server says the account got verified in the meantime
    session.refresh_profile().await.unwrap();
    assert_eq!(session.state(), AuthState::AuthenticatedVerified);
}
