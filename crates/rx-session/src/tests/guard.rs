use crate::{GuardDecision, HistoryNavigator, NavigationMode, Navigator, RouteGuard};

use rx_core::{Principal, SessionState, Surface};

fn authenticated() -> SessionState {
    SessionState::Authenticated(Principal {
        id: "adm-1".into(),
        name: "Asha Rao".into(),
        email: "asha@rxadmin.in".into(),
        status: None,
        role: Some("superadmin".into()),
        permissions: vec!["customers:approve".into()],
        establishment_name: None,
    })
}

#[test]
fn given_unresolved_when_any_guard_decides_then_loading() {
    for guard in [RouteGuard::Protected, RouteGuard::PublicOnly] {
        for surface in [Surface::Admin, Surface::Customer] {
            assert_eq!(
                guard.decide(surface, &SessionState::Unresolved),
                GuardDecision::Loading
            );
        }
    }
}

#[test]
fn given_anonymous_when_protected_then_replaces_to_login() {
    assert_eq!(
        RouteGuard::Protected.decide(Surface::Customer, &SessionState::Anonymous),
        GuardDecision::Redirect {
            to: "/login",
            mode: NavigationMode::Replace
        }
    );
    assert_eq!(
        RouteGuard::Protected.decide(Surface::Admin, &SessionState::Anonymous),
        GuardDecision::Redirect {
            to: "/admin/login",
            mode: NavigationMode::Replace
        }
    );
}

#[test]
fn given_authenticated_when_protected_then_renders() {
    assert_eq!(
        RouteGuard::Protected.decide(Surface::Admin, &authenticated()),
        GuardDecision::Render
    );
}

#[test]
fn given_authenticated_when_public_only_then_replaces_to_dashboard() {
    assert_eq!(
        RouteGuard::PublicOnly.decide(Surface::Admin, &authenticated()),
        GuardDecision::Redirect {
            to: "/admin/dashboard",
            mode: NavigationMode::Replace
        }
    );
    assert_eq!(
        RouteGuard::PublicOnly.decide(Surface::Customer, &authenticated()),
        GuardDecision::Redirect {
            to: "/dashboard",
            mode: NavigationMode::Replace
        }
    );
}

#[test]
fn given_anonymous_when_public_only_then_renders() {
    assert_eq!(
        RouteGuard::PublicOnly.decide(Surface::Customer, &SessionState::Anonymous),
        GuardDecision::Render
    );
}

#[test]
fn given_redirect_when_applied_then_history_entry_replaced() {
    // Given
    let navigator = HistoryNavigator::new("/");
    navigator.navigate("/dashboard", NavigationMode::Push);
    let decision = RouteGuard::Protected.decide(Surface::Customer, &SessionState::Anonymous);

    // When
    let render = decision.apply(&navigator);

    // Then
    assert!(!render);
    assert_eq!(navigator.history(), vec!["/".to_string(), "/login".to_string()]);
}

#[test]
fn given_loading_when_applied_then_no_navigation() {
    let navigator = HistoryNavigator::new("/dashboard");

    let render = GuardDecision::Loading.apply(&navigator);

    assert!(!render);
    assert_eq!(navigator.history(), vec!["/dashboard".to_string()]);
}

#[test]
fn given_render_when_applied_then_route_may_render() {
    let navigator = HistoryNavigator::new("/dashboard");

    assert!(GuardDecision::Render.apply(&navigator));
}
