use crate::Principal;

use serde::{Deserialize, Serialize};

/// Display fields of the signed-in admin kept next to the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedProfile {
    pub name: String,
    pub email: String,
}

impl From<&Principal> for CachedProfile {
    fn from(principal: &Principal) -> Self {
        Self {
            name: principal.display_name().to_string(),
            email: principal.email.clone(),
        }
    }
}
