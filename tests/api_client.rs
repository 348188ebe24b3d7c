//! HTTP-level behavior of the API client: token header handling, error
//! mapping, and the 401 path.

use httpmock::prelude::*;
use serde_json::json;

use qafzh_market::api::{ApiClient, ApiError};

fn profile_body() -> serde_json::Value {
    json!({
        "status": 200,
        "message": "ok",
        "data": {
            "user": {
                "id": "u1",
                "phone": "+967700000000",
                "name": "Salim",
                "isVerified": true
            }
        }
    })
}

#[tokio::test]
async fn bearer_token_is_sent_once_set() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/profile")
            .header("authorization", "Bearer tok-abc");
        then.status(200).json_body(profile_body());
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    client.set_token(Some("tok-abc"));

    let user = client.get_profile().await.unwrap();
    assert_eq!(user.phone, "+967700000000");
    mock.assert();
}

#[tokio::test]
async fn no_authorization_header_after_clearing_token() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/auth/profile").matches(|req| {
            !req.headers
                .as_ref()
                .map(|headers| {
                    headers
                        .iter()
                        .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                })
                .unwrap_or(false)
        });
        then.status(200).json_body(profile_body());
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    client.set_token(Some("tok-abc"));
    client.set_token(None);

    client.get_profile().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn token_is_shared_across_clones() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/profile")
            .header("authorization", "Bearer shared");
        then.status(200).json_body(profile_body());
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let clone = client.clone();
    client.set_token(Some("shared"));

    clone.get_profile().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn unauthorized_clears_token_slot_and_surfaces_auth_expired() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/auth/profile");
        then.status(401).json_body(json!({ "message": "jwt expired" }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    client.set_token(Some("stale"));

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::AuthExpired));
    // the slot is cleared exactly once, by this request
    assert!(client.token().is_none());
}

#[tokio::test]
async fn server_error_carries_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(422)
            .json_body(json!({ "message": "invalid credentials" }));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let err = client.login("+967700000000", "nope").await.unwrap_err();

    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_maps_to_network_error() {
    // nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let err = client.get_profile().await.unwrap_err();
    assert!(err.is_network());
}
