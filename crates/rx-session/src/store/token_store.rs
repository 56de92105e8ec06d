use crate::store::{KeyValueStore, StoreResult};

use std::sync::Arc;

use log::{debug, warn};
use rx_core::{CachedProfile, Surface};

/// Persisted bearer token (and admin profile cache) of one surface.
///
/// Reads never fail: an unreadable slot is logged and treated as empty, so a
/// broken store degrades to "signed out" rather than blocking requests.
#[derive(Clone)]
pub struct TokenStore {
    surface: Surface,
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(surface: Surface, store: Arc<dyn KeyValueStore>) -> Self {
        Self { surface, store }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn token(&self) -> Option<String> {
        match self.store.get(self.surface.token_key()) {
            Ok(Some(token)) if !token.trim().is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read {} token: {e}", self.surface);
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) -> StoreResult<()> {
        self.store.set(self.surface.token_key(), token)
    }

    pub fn cached_profile(&self) -> Option<CachedProfile> {
        let key = self.surface.profile_key()?;

        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read cached {} profile: {e}", self.surface);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Discarding unreadable cached {} profile: {e}", self.surface);
                None
            }
        }
    }

    /// No-op for surfaces without a profile slot
    pub fn set_cached_profile(&self, profile: &CachedProfile) -> StoreResult<()> {
        let Some(key) = self.surface.profile_key() else {
            return Ok(());
        };

        let raw = serde_json::to_string(profile)?;
        self.store.set(key, &raw)
    }

    /// Remove the token and cached profile. Failures are logged, never returned.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(self.surface.token_key()) {
            warn!("Failed to remove {} token: {e}", self.surface);
        }
        self.clear_profile();
    }

    /// Clear only while `token` is still the persisted one.
    ///
    /// Returns whether anything was removed. A response for a token that has
    /// since been replaced must not sign the new session out.
    pub fn clear_if_current(&self, token: &str) -> bool {
        match self.store.remove_if(self.surface.token_key(), token) {
            Ok(true) => {
                self.clear_profile();
                true
            }
            Ok(false) => {
                debug!("{} token already replaced or cleared", self.surface);
                false
            }
            Err(e) => {
                warn!("Failed to remove {} token: {e}", self.surface);
                false
            }
        }
    }

    fn clear_profile(&self) {
        if let Some(key) = self.surface.profile_key()
            && let Err(e) = self.store.remove(key)
        {
            warn!("Failed to remove cached {} profile: {e}", self.surface);
        }
    }
}
