//! Integration tests for the one-shot session bootstrap

use fairway_client::{ApiClient, BootstrapOutcome, BootstrapState, SessionBootstrap};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri())).expect("client should build")
}

#[tokio::test]
async fn test_token_is_exchanged_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/session"))
        .and(body_json(json!({ "session_id": "ABC123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Admin",
            "email": "admin@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bootstrap = SessionBootstrap::new("#session_id=ABC123&state=xyz");

    // Re-entering the flow must not repeat the exchange.
    let first = bootstrap.run(&client).await;
    let second = bootstrap.run(&client).await;

    assert_eq!(first, second);
    match first {
        BootstrapOutcome::Authenticated { user, open_admin } => {
            assert_eq!(user.email, "admin@example.com");
            assert!(open_admin);
        }
        BootstrapOutcome::Unauthenticated => panic!("exchange should have succeeded"),
    }
    assert_eq!(bootstrap.state(), BootstrapState::Done(second));
}

#[tokio::test]
async fn test_concurrent_runs_share_one_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Admin",
            "email": "admin@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bootstrap = Arc::new(SessionBootstrap::new("session_id=tok99"));

    let a = {
        let bootstrap = Arc::clone(&bootstrap);
        let client = client.clone();
        tokio::spawn(async move { bootstrap.run(&client).await })
    };
    let b = {
        let bootstrap = Arc::clone(&bootstrap);
        let client = client.clone();
        tokio::spawn(async move { bootstrap.run(&client).await })
    };

    let (a, b) = (a.await.expect("task a"), b.await.expect("task b"));
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_no_token_means_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bootstrap = SessionBootstrap::new("#state=only");

    let outcome = bootstrap.run(&client).await;
    assert_eq!(outcome, BootstrapOutcome::Unauthenticated);
}

#[tokio::test]
async fn test_failed_exchange_collapses_to_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/session"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Token expired" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bootstrap = SessionBootstrap::new("#session_id=stale");

    let outcome = bootstrap.run(&client).await;
    assert_eq!(outcome, BootstrapOutcome::Unauthenticated);

    // The failed outcome is cached; no retry storm against the backend.
    let again = bootstrap.run(&client).await;
    assert_eq!(again, BootstrapOutcome::Unauthenticated);
}
