//! Client-side session lifecycle for the admin and customer surfaces.
//!
//! One [`Session`] per surface owns the session state, persists the bearer
//! token through a [`TokenStore`] and talks to the backend through a
//! [`CredentialGateway`]. Authorization failures seen by the gateway are
//! published on [`SessionEvents`] and turned into a login redirect by a single
//! [`NavigationListener`].

pub mod events;
pub mod gateway;
pub mod guard;
pub mod navigation;
pub mod session;
pub mod store;

pub use events::{SessionEvent, SessionEvents};
pub use gateway::{CredentialGateway, GatewayError, GatewayResult, OnUnauthorized};
pub use guard::{GuardDecision, RouteGuard};
pub use navigation::{HistoryNavigator, NavigationListener, NavigationMode, Navigator};
pub use session::{AuthFailure, FailureKind, Session, SessionCell};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult, TokenStore};

#[cfg(test)]
mod tests;
