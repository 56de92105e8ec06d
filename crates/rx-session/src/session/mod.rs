pub(crate) mod auth_failure;
pub(crate) mod auth_response;
#[allow(clippy::module_inception)]
pub(crate) mod session;
pub(crate) mod state_cell;

pub use auth_failure::{AuthFailure, FailureKind};
pub use session::Session;
pub use state_cell::SessionCell;
