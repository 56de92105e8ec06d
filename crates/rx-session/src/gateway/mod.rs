pub(crate) mod credential_gateway;
pub(crate) mod error;
pub(crate) mod error_payload;
pub(crate) mod unauthorized_policy;

pub use credential_gateway::CredentialGateway;
pub use error::{GatewayError, Result as GatewayResult};
pub use unauthorized_policy::OnUnauthorized;
