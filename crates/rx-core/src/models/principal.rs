use crate::AccountStatus;

use serde::{Deserialize, Serialize};

/// Authenticated admin or customer, as last validated by the backend.
///
/// Deserialization is lenient about naming because the admin and customer
/// endpoints describe users slightly differently (`_id` vs `id`, `ownerName`
/// vs `name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "ownerName", alias = "owner_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default, alias = "establishment_name")]
    pub establishment_name: Option<String>,
}

impl Principal {
    /// Name to show in page chrome, falling back to establishment and email
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return &self.name;
        }

        match self.establishment_name.as_deref() {
            Some(establishment) if !establishment.trim().is_empty() => establishment,
            _ => &self.email,
        }
    }

    /// Customers may browse while pending but only approved accounts may order
    pub fn is_approved(&self) -> bool {
        self.status.is_none_or(|status| status.is_approved())
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
