use crate::events::SessionEvents;
use crate::gateway::{CredentialGateway, GatewayError, GatewayResult, OnUnauthorized};
use crate::session::auth_failure::{LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE};
use crate::session::auth_response::{AuthResponse, ProfileResponse};
use crate::session::{AuthFailure, SessionCell};
use crate::store::{KeyValueStore, TokenStore};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use rx_config::ApiConfig;
use rx_core::{
    CachedProfile, Credentials, Principal, RegistrationForm, SessionState, Surface,
    validate_credentials, validate_registration,
};
use tokio::sync::watch;

const PROFILE_FAILED_MESSAGE: &str = "Unable to load your profile. Please try again.";

/// Session store of one surface (admin or customer).
///
/// Owns the observable [`SessionState`], the persisted token and the gateway
/// used for every backend call. Operations never panic or propagate errors
/// across this boundary; they resolve to a `Result` the caller renders.
pub struct Session {
    surface: Surface,
    tokens: TokenStore,
    state: SessionCell,
    events: SessionEvents,
    gateway: Arc<CredentialGateway>,
    bootstrap_started: AtomicBool,
}

impl Session {
    pub fn new(
        surface: Surface,
        config: &ApiConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> GatewayResult<Self> {
        let tokens = TokenStore::new(surface, store);
        let state = SessionCell::new();
        let events = SessionEvents::new();
        let gateway =
            CredentialGateway::new(config, tokens.clone(), state.clone(), events.clone())?;

        Ok(Self {
            surface,
            tokens,
            state,
            events,
            gateway: Arc::new(gateway),
            bootstrap_started: AtomicBool::new(false),
        })
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Gateway for the surface's other authorized calls
    pub fn gateway(&self) -> Arc<CredentialGateway> {
        Arc::clone(&self.gateway)
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.get().principal().cloned()
    }

    /// Admin display fields cached from the last sign-in
    pub fn cached_profile(&self) -> Option<CachedProfile> {
        self.tokens.cached_profile()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Signed in with a principal AND a persisted token
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated() && self.tokens.token().is_some()
    }

    /// Wait until bootstrap (or a sign-in) has left `Unresolved`
    pub async fn wait_resolved(&self) -> SessionState {
        let mut rx = self.state.subscribe();
        match rx.wait_for(SessionState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => self.state.get(),
        }
    }

    /// Validate the persisted token once and resolve the session.
    ///
    /// Only the first call does any work; later calls wait for the outcome.
    pub async fn bootstrap(&self) -> SessionState {
        if self.bootstrap_started.swap(true, Ordering::AcqRel) {
            return self.wait_resolved().await;
        }

        let Some(token) = self.tokens.token() else {
            debug!("No persisted {} token, starting anonymous", self.surface);
            self.state.resolve(SessionState::Anonymous);
            return self.state.get();
        };

        let result = self
            .gateway
            .get_with::<ProfileResponse>(&self.surface.profile_path(), OnUnauthorized::Report)
            .await;

        match result {
            Ok(_) if self.tokens.token().as_deref() != Some(token.as_str()) => {
                debug!("{} token changed during bootstrap, discarding profile", self.surface);
                self.state.resolve(SessionState::Anonymous);
            }
            Ok(profile) => {
                let principal = profile.into_principal();
                info!("Restored {} session for {}", self.surface, principal.email);
                self.cache_profile(&principal);
                if self
                    .state
                    .resolve(SessionState::Authenticated(principal))
                {
                    self.events.rearm();
                }
            }
            Err(e) => {
                warn!("Persisted {} token not accepted: {e}", self.surface);
                self.state.resolve(SessionState::Anonymous);
                self.tokens.clear_if_current(&token);
            }
        }

        self.state.get()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Principal, AuthFailure> {
        let errors = validate_credentials(credentials);
        if !errors.is_empty() {
            return Err(AuthFailure::validation(errors));
        }

        let credentials = Credentials::new(credentials.email.trim(), credentials.password.as_str());
        let response = self
            .gateway
            .post_with::<AuthResponse, _>(
                &self.surface.login_path(),
                &credentials,
                OnUnauthorized::Report,
            )
            .await
            .map_err(|e| {
                debug!("{} login failed: {e}", self.surface);
                AuthFailure::from_gateway(&e, LOGIN_FAILED_MESSAGE)
            })?;

        self.establish(response, LOGIN_FAILED_MESSAGE)
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<Principal, AuthFailure> {
        let errors = validate_registration(form);
        if !errors.is_empty() {
            debug!("Registration form has {} invalid field(s)", errors.len());
            return Err(AuthFailure::validation(errors));
        }

        let response = self
            .gateway
            .post_with::<AuthResponse, _>(
                &self.surface.register_path(),
                &form.normalized(),
                OnUnauthorized::Report,
            )
            .await
            .map_err(|e| {
                debug!("{} registration failed: {e}", self.surface);
                AuthFailure::from_gateway(&e, REGISTRATION_FAILED_MESSAGE)
            })?;

        self.establish(response, REGISTRATION_FAILED_MESSAGE)
    }

    /// Sign out locally. Always succeeds; storage errors are only logged.
    pub fn logout(&self) {
        self.state.set(SessionState::Anonymous);
        self.tokens.clear();
        self.events.logged_out(self.surface);
        info!("Signed out of {}", self.surface);
    }

    /// Re-fetch the principal with the current token.
    ///
    /// A 401 here ends the session through the gateway. If the token changed
    /// while the request was in flight (sign-out or another sign-in), the
    /// fetched principal is returned but neither cached nor applied.
    pub async fn refresh_profile(&self) -> Result<Principal, AuthFailure> {
        let carried = self.tokens.token();
        let principal = self
            .gateway
            .get::<ProfileResponse>(&self.surface.profile_path())
            .await
            .map_err(|e| AuthFailure::from_gateway(&e, PROFILE_FAILED_MESSAGE))?
            .into_principal();

        if carried.is_none() || self.tokens.token() != carried {
            debug!("Discarding {} profile for an ended session", self.surface);
            return Ok(principal);
        }

        self.cache_profile(&principal);
        self.state.authenticate(principal.clone());
        Ok(principal)
    }

    fn establish(&self, response: AuthResponse, fallback: &str) -> Result<Principal, AuthFailure> {
        let AuthResponse { token, user } = response;

        if token.trim().is_empty() {
            warn!("{} auth response carried no token", self.surface);
            return Err(AuthFailure::from_gateway(
                &GatewayError::decode("response has an empty token"),
                fallback,
            ));
        }

        self.tokens
            .set_token(&token)
            .map_err(|e| AuthFailure::storage(&e))?;
        self.cache_profile(&user);

        self.state.authenticate(user.clone());
        self.events.rearm();
        info!("Signed in to {} as {}", self.surface, user.email);

        Ok(user)
    }

    fn cache_profile(&self, principal: &Principal) {
        if let Err(e) = self
            .tokens
            .set_cached_profile(&CachedProfile::from(principal))
        {
            warn!("Failed to cache {} profile: {e}", self.surface);
        }
    }
}
