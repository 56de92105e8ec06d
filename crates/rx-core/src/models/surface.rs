use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Front-end surface a session belongs to.
///
/// The two surfaces keep their credentials in separate storage slots so an
/// admin and a customer session can coexist on the same machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Back-office used by platform administrators
    Admin,
    /// Storefront used by pharmacies and distributors
    #[default]
    Customer,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    /// Storage key holding the bearer token
    pub fn token_key(&self) -> &'static str {
        match self {
            Self::Admin => "admin_token",
            Self::Customer => "customer_token",
        }
    }

    /// Storage key holding cached profile display fields (admin only)
    pub fn profile_key(&self) -> Option<&'static str> {
        match self {
            Self::Admin => Some("admin_profile"),
            Self::Customer => None,
        }
    }

    /// Path prefix of the backend endpoints serving this surface
    pub fn api_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "/api/admin",
            Self::Customer => "/api",
        }
    }

    pub fn login_path(&self) -> String {
        format!("{}/auth/login", self.api_prefix())
    }

    pub fn register_path(&self) -> String {
        format!("{}/auth/register", self.api_prefix())
    }

    pub fn profile_path(&self) -> String {
        format!("{}/auth/profile", self.api_prefix())
    }

    /// Client route of the login screen
    pub fn login_route(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/login",
            Self::Customer => "/login",
        }
    }

    /// Client route users land on once signed in
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Customer => "/dashboard",
        }
    }
}

impl FromStr for Surface {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err(CoreError::invalid_surface(s)),
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
