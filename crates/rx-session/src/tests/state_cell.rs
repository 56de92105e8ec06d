use crate::SessionCell;

use rx_core::{Principal, SessionState};

fn principal() -> Principal {
    Principal {
        id: "cust-1".into(),
        name: "Priya Nair".into(),
        email: "orders@sunrisemedicals.in".into(),
        status: None,
        role: None,
        permissions: Vec::new(),
        establishment_name: None,
    }
}

#[test]
fn given_new_cell_when_read_then_unresolved() {
    let cell = SessionCell::new();

    assert_eq!(cell.get(), SessionState::Unresolved);
}

#[test]
fn given_unresolved_when_resolved_then_state_changes_once() {
    // Given
    let cell = SessionCell::new();

    // When
    let first = cell.resolve(SessionState::Anonymous);
    let second = cell.resolve(SessionState::Authenticated(principal()));

    // Then
    assert!(first);
    assert!(!second);
    assert_eq!(cell.get(), SessionState::Anonymous);
}

#[test]
fn given_authenticated_when_session_ended_then_anonymous() {
    // Given
    let cell = SessionCell::new();
    cell.authenticate(principal());

    // When
    let ended = cell.end_session();

    // Then
    assert!(ended);
    assert_eq!(cell.get(), SessionState::Anonymous);
}

#[test]
fn given_anonymous_when_session_ended_then_nothing_changes() {
    let cell = SessionCell::new();
    cell.resolve(SessionState::Anonymous);

    assert!(!cell.end_session());
}

#[test]
fn given_unresolved_when_session_ended_then_stays_unresolved() {
    let cell = SessionCell::new();

    assert!(!cell.end_session());
    assert_eq!(cell.get(), SessionState::Unresolved);
}

#[test]
fn given_subscriber_when_state_set_then_change_is_observed() {
    // Given
    let cell = SessionCell::new();
    let mut rx = cell.subscribe();

    // When
    cell.authenticate(principal());

    // Then
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().is_authenticated());
}

#[test]
fn given_same_state_when_set_again_then_subscribers_not_woken() {
    // Given
    let cell = SessionCell::new();
    cell.set(SessionState::Anonymous);
    let mut rx = cell.subscribe();
    rx.borrow_and_update();

    // When
    cell.set(SessionState::Anonymous);

    // Then
    assert!(!rx.has_changed().unwrap());
}
