use rx_core::Principal;
use serde::Deserialize;

/// Body of a successful login or registration
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    #[serde(alias = "admin", alias = "customer")]
    pub user: Principal,
}

/// Body of the profile endpoint: `{ "user": {...} }` or the user itself
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProfileResponse {
    Wrapped {
        #[serde(alias = "admin", alias = "customer")]
        user: Principal,
    },
    Bare(Principal),
}

impl ProfileResponse {
    pub fn into_principal(self) -> Principal {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}
