use std::time::Duration;

use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::Config;
use crate::net::api::ApiClient;

fn store_for(base_url: &str) -> SessionStore {
    let config = Config::new(base_url);
    let api = ApiClient::new(&config).expect("client should build");
    SessionStore::new(api)
}

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn starts_logged_out() {
    let store = store_for("http://127.0.0.1:9");
    assert!(!store.is_logged_in());
}

// =============================================================================
// refresh_user: success path
// =============================================================================

#[tokio::test]
async fn refresh_success_sets_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "logged in"
        })))
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    store.refresh_user().await;
    assert!(store.is_logged_in());
}

#[tokio::test]
async fn refresh_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .and(body_string(String::new()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    store.refresh_user().await;
    assert!(store.is_logged_in());
}

// =============================================================================
// refresh_user: failure paths
// =============================================================================

#[tokio::test]
async fn refresh_unauthorized_sets_logged_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    store.refresh_user().await;
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn refresh_server_error_sets_logged_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    store.refresh_user().await;
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn refresh_connection_refused_sets_logged_out() {
    // Nothing listens here; the request errors before reaching a server and
    // refresh_user must absorb that instead of panicking or propagating.
    let store = store_for("http://127.0.0.1:9");
    store.refresh_user().await;
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn refresh_failure_overwrites_previous_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    store.refresh_user().await;
    assert!(store.is_logged_in());

    store.refresh_user().await;
    assert!(!store.is_logged_in());
}

// =============================================================================
// refresh_user: idempotence
// =============================================================================

#[tokio::test]
async fn refresh_twice_same_outcome_as_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    store.refresh_user().await;
    store.refresh_user().await;
    assert!(store.is_logged_in());
}

// =============================================================================
// refresh_user: overlapping calls
// =============================================================================

#[tokio::test]
async fn overlapping_refreshes_last_completion_wins() {
    let server = MockServer::start().await;
    // First request to arrive gets an immediate rejection; the other gets a
    // delayed success, so the success always completes last.
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login/check"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
        .mount(&server)
        .await;

    let store = store_for(&server.uri());
    tokio::join!(store.refresh_user(), store.refresh_user());
    assert!(store.is_logged_in());
}
