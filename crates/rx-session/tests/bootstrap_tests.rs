//! Start-up resolution of a persisted session

mod common;

use common::{customer_json, session, session_with_token};

use rx_core::{SessionState, Surface};
use rx_session::{GuardDecision, KeyValueStore, NavigationMode, RouteGuard};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn given_no_token_when_bootstrapped_then_anonymous_without_request() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .expect(0)
        .mount(&server)
        .await;
    let (_store, session) = session(&server, Surface::Customer);

    // When
    let state = session.bootstrap().await;

    // Then
    assert_eq!(state, SessionState::Anonymous);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn given_valid_token_when_bootstrapped_then_authenticated_with_bearer() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer tok-valid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": customer_json() })))
        .expect(1)
        .mount(&server)
        .await;
    let (_store, session) = session_with_token(&server, Surface::Customer, "tok-valid");

    // When
    let state = session.bootstrap().await;

    // Then
    assert!(state.is_authenticated());
    assert!(session.is_authenticated());
    let principal = session.principal().unwrap();
    assert_eq!(principal.id, "65f1c0ffee");
    assert_eq!(principal.display_name(), "Priya Nair");
    assert!(principal.is_approved());
}

#[tokio::test]
async fn given_bare_profile_body_when_bootstrapped_then_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .mount(&server)
        .await;
    let (_store, session) = session_with_token(&server, Surface::Customer, "tok-valid");

    let state = session.bootstrap().await;

    assert!(state.is_authenticated());
}

#[tokio::test]
async fn given_rejected_token_when_bootstrapped_then_anonymous_and_token_cleared() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "jwt expired" })),
        )
        .mount(&server)
        .await;
    let (store, session) = session_with_token(&server, Surface::Customer, "tok-expired");

    // When
    let state = session.bootstrap().await;

    // Then
    assert_eq!(state, SessionState::Anonymous);
    assert!(store.get("customer_token").unwrap().is_none());
    // Bootstrap cleans up itself; guards do the redirecting
    assert!(!session.events().is_latched());
}

#[tokio::test]
async fn given_server_error_when_bootstrapped_then_anonymous_and_token_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/auth/profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (store, session) = session_with_token(&server, Surface::Admin, "tok-admin");

    let state = session.bootstrap().await;

    assert_eq!(state, SessionState::Anonymous);
    assert!(store.get("admin_token").unwrap().is_none());
}

#[tokio::test]
async fn given_bootstrap_called_twice_when_awaited_then_profile_fetched_once() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .expect(1)
        .mount(&server)
        .await;
    let (_store, session) = session_with_token(&server, Surface::Customer, "tok-valid");

    // When
    let (first, second) = tokio::join!(session.bootstrap(), session.bootstrap());

    // Then
    assert!(first.is_authenticated());
    assert_eq!(first, second);
}

#[tokio::test]
async fn given_guard_waiting_when_bootstrap_finishes_then_guard_decides_after_resolution() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_delay(std::time::Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    let (_store, session) = session_with_token(&server, Surface::Customer, "tok-expired");
    assert_eq!(
        RouteGuard::Protected.decide(session.surface(), &session.state()),
        GuardDecision::Loading
    );

    // When
    let (_, decision) = tokio::join!(
        session.bootstrap(),
        RouteGuard::Protected.resolve(&session)
    );

    // Then
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: "/login",
            mode: NavigationMode::Replace
        }
    );
}
