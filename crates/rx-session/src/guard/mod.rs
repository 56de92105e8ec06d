//! Render-or-redirect decisions for routes that depend on authentication.

use crate::navigation::{NavigationMode, Navigator};
use crate::session::Session;

use log::debug;
use rx_core::{SessionState, Surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; show a neutral loading indicator only
    Loading,
    Render,
    Redirect {
        to: &'static str,
        mode: NavigationMode,
    },
}

impl GuardDecision {
    fn redirect(to: &'static str) -> Self {
        Self::Redirect {
            to,
            mode: NavigationMode::Replace,
        }
    }

    /// Perform the redirect, if any. Returns whether the route may render.
    pub fn apply(&self, navigator: &dyn Navigator) -> bool {
        match self {
            Self::Loading => false,
            Self::Render => true,
            Self::Redirect { to, mode } => {
                if navigator.current() != *to {
                    navigator.navigate(to, *mode);
                }
                false
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Signed-in content; anonymous visitors go to the login route
    Protected,
    /// Login and registration screens; signed-in users go to the dashboard
    PublicOnly,
}

impl RouteGuard {
    pub fn decide(&self, surface: Surface, state: &SessionState) -> GuardDecision {
        match (self, state) {
            (_, SessionState::Unresolved) => GuardDecision::Loading,
            (Self::Protected, SessionState::Anonymous) => {
                GuardDecision::redirect(surface.login_route())
            }
            (Self::PublicOnly, SessionState::Authenticated(_)) => {
                GuardDecision::redirect(surface.dashboard_route())
            }
            _ => GuardDecision::Render,
        }
    }

    /// Wait for the session to resolve, then decide
    pub async fn resolve(&self, session: &Session) -> GuardDecision {
        let state = session.wait_resolved().await;
        let decision = self.decide(session.surface(), &state);
        debug!("{self:?} guard on {state}: {decision:?}");
        decision
    }
}
