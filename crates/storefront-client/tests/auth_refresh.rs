use std::sync::Arc;

use httpmock::prelude::*;
use storefront_client::{ApiClient, ApiError};
use storefront_session::memory::MemoryTokenStore;
use storefront_types::ports::token_store::TokenStore;

fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "name": "Asha",
        "email": "asha@example.com",
        "role": "manager",
        "country": "IN",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z"
    })
}

async fn client_with_token(server: &MockServer, token: &str) -> (ApiClient, MemoryTokenStore) {
    let tokens = MemoryTokenStore::new();
    tokens.set(token).await.unwrap();
    let client = ApiClient::new(&server.base_url(), Arc::new(tokens.clone())).unwrap();
    (client, tokens)
}

// Five requests race into a 401 while the coordinator is idle: exactly one
// refresh call goes out and every request resolves with the new token.
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_401s_share_one_refresh() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/auth/me")
            .header("authorization", "Bearer stale");
        then.status(401);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/auth/me")
            .header("authorization", "Bearer fresh");
        then.status(200).json_body(profile_json());
    });
    let refresh_mock = server.mock(|when, then| {
        when.method(POST).path("/auth/refresh-token");
        then.status(200)
            .json_body(serde_json::json!({ "token": "fresh" }));
    });

    let (client, tokens) = client_with_token(&server, "stale").await;

    let (a, b, c, d, e) = tokio::join!(
        client.me(),
        client.me(),
        client.me(),
        client.me(),
        client.me()
    );
    for res in [a, b, c, d, e] {
        assert_eq!(res.unwrap().user.id, "u1");
    }

    refresh_mock.assert_hits(1);
    assert_eq!(tokens.get().await.unwrap().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn failed_refresh_clears_token_and_expires_session() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/auth/me");
        then.status(401);
    });
    let refresh_mock = server.mock(|when, then| {
        when.method(POST).path("/auth/refresh-token");
        then.status(401)
            .json_body(serde_json::json!({ "message": "refresh token expired" }));
    });

    let (client, tokens) = client_with_token(&server, "stale").await;

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert!(tokens.get().await.unwrap().is_none());
    refresh_mock.assert_hits(1);
}

// Waiters queued behind a failing refresh are flushed with the failure
// instead of piling further refresh calls onto a dead session.
#[tokio::test(flavor = "multi_thread")]
async fn queued_waiters_fail_when_refresh_fails() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/auth/me");
        then.status(401);
    });
    server.mock(|when, then| {
        when.method(POST).path("/auth/refresh-token");
        then.status(500);
    });

    let (client, tokens) = client_with_token(&server, "stale").await;

    let (a, b, c) = tokio::join!(client.me(), client.me(), client.me());
    for res in [a, b, c] {
        assert!(matches!(res.unwrap_err(), ApiError::SessionExpired));
    }
    assert!(tokens.get().await.unwrap().is_none());
}

// A request that still sees a 401 after its one replay surfaces the 401
// instead of looping back into the refresh flow.
#[tokio::test]
async fn replayed_request_is_not_retried_again() {
    let server = MockServer::start();

    let me_mock = server.mock(|when, then| {
        when.method(GET).path("/auth/me");
        then.status(401);
    });
    let refresh_mock = server.mock(|when, then| {
        when.method(POST).path("/auth/refresh-token");
        then.status(200)
            .json_body(serde_json::json!({ "token": "fresh" }));
    });

    let (client, _tokens) = client_with_token(&server, "stale").await;

    let err = client.me().await.unwrap_err();
    match err {
        ApiError::Api { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Api 401, got {other:?}"),
    }
    refresh_mock.assert_hits(1);
    me_mock.assert_hits(2);
}

// The bearer token and a generated request id ride on every request.
#[tokio::test]
async fn attaches_bearer_and_request_id() {
    let server = MockServer::start();
    let me_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/me")
            .header("authorization", "Bearer tok-1")
            .header_exists("x-request-id");
        then.status(200).json_body(profile_json());
    });

    let (client, _tokens) = client_with_token(&server, "tok-1").await;
    client.me().await.unwrap();
    me_mock.assert();
}

// A refresh that never answers is cut off by the timeout instead of hanging
// the queued requests forever.
#[tokio::test]
async fn refresh_timeout_expires_the_session() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/auth/me");
        then.status(401);
    });
    server.mock(|when, then| {
        when.method(POST).path("/auth/refresh-token");
        then.status(200)
            .delay(std::time::Duration::from_secs(5))
            .json_body(serde_json::json!({ "token": "fresh" }));
    });

    let tokens = MemoryTokenStore::new();
    tokens.set("stale").await.unwrap();
    let client = ApiClient::builder(&server.base_url(), Arc::new(tokens.clone()))
        .unwrap()
        .with_refresh_timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert!(tokens.get().await.unwrap().is_none());
}
