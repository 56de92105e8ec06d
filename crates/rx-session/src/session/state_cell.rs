use std::sync::Arc;

use log::debug;
use rx_core::{Principal, SessionState};
use tokio::sync::watch;

/// Shared, observable session state of one surface.
///
/// The gateway needs to end the session on 401 without owning the
/// [`Session`](crate::Session); both hold a clone of the same cell.
#[derive(Clone)]
pub struct SessionCell {
    tx: Arc<watch::Sender<SessionState>>,
}

impl SessionCell {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionState::Unresolved);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    pub fn set(&self, state: SessionState) {
        self.tx.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            debug!("Session state {current} -> {state}");
            *current = state;
            true
        });
    }

    pub fn authenticate(&self, principal: Principal) {
        self.set(SessionState::Authenticated(principal));
    }

    /// Leave `Unresolved`. A session already resolved (e.g. by a login that
    /// finished first) is left alone. Returns whether the state changed.
    pub fn resolve(&self, state: SessionState) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_resolved() {
                return false;
            }
            debug!("Session resolved as {state}");
            *current = state;
            true
        })
    }

    /// Move an authenticated session to `Anonymous`. Returns whether a
    /// signed-in session was ended.
    pub fn end_session(&self) -> bool {
        let mut ended = false;
        self.tx.send_if_modified(|current| {
            if !current.is_authenticated() {
                return false;
            }
            *current = SessionState::Anonymous;
            ended = true;
            true
        });
        ended
    }
}

impl Default for SessionCell {
    fn default() -> Self {
        Self::new()
    }
}
