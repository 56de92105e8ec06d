use crate::events::SessionEvents;
use crate::gateway::error_payload::ErrorPayload;
use crate::gateway::{GatewayError, GatewayResult, OnUnauthorized};
use crate::session::SessionCell;
use crate::store::TokenStore;

use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use rx_config::ApiConfig;
use rx_core::Surface;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The single path every backend call of a surface goes through.
///
/// Reads the current bearer token from storage on every request, so a token
/// written by a login is used by the very next call. Non-success responses
/// are classified into [`GatewayError`]; a 401 under
/// [`OnUnauthorized::Invalidate`] also ends the session.
pub struct CredentialGateway {
    base_url: String,
    timeout_secs: u64,
    client: ReqwestClient,
    tokens: TokenStore,
    state: SessionCell,
    events: SessionEvents,
}

impl CredentialGateway {
    pub fn new(
        config: &ApiConfig,
        tokens: TokenStore,
        state: SessionCell,
        events: SessionEvents,
    ) -> GatewayResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(GatewayError::build)?;

        Ok(Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
            client,
            tokens,
            state,
            events,
        })
    }

    pub fn surface(&self) -> Surface {
        self.tokens.surface()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        self.get_with(path, OnUnauthorized::Invalidate).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        policy: OnUnauthorized,
    ) -> GatewayResult<T> {
        let (req, carried) = self.request(Method::GET, path);
        self.execute(req, carried, policy).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        self.post_with(path, body, OnUnauthorized::Invalidate).await
    }

    pub async fn post_with<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        policy: OnUnauthorized,
    ) -> GatewayResult<T> {
        let (req, carried) = self.request(Method::POST, path);
        self.execute(req.json(body), carried, policy).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let (req, carried) = self.request(Method::PUT, path);
        self.execute(req.json(body), carried, OnUnauthorized::Invalidate)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let (req, carried) = self.request(Method::DELETE, path);
        self.execute(req, carried, OnUnauthorized::Invalidate).await
    }

    /// Build a request, attaching the bearer token if one is stored.
    ///
    /// Also returns the token that was attached so a later 401 can tell
    /// whether it concerns the current session.
    fn request(&self, method: Method, path: &str) -> (RequestBuilder, Option<String>) {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");

        let mut req = self.client.request(method, &url);
        let token = self.tokens.token();
        if let Some(ref token) = token {
            req = req.bearer_auth(token);
        }

        (req, token)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        carried: Option<String>,
        policy: OnUnauthorized,
    ) -> GatewayResult<T> {
        let response = req.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let payload = ErrorPayload::parse(&body);
            let err =
                GatewayError::from_status(status.as_u16(), payload.message, payload.field_errors);

            if err.is_unauthorized() && policy == OnUnauthorized::Invalidate {
                self.invalidate(carried.as_deref());
            } else {
                debug!("{} request failed: {err}", self.surface());
            }

            return Err(err);
        }

        let body = if body.trim().is_empty() {
            "null"
        } else {
            body.as_str()
        };
        serde_json::from_str(body).map_err(|e| GatewayError::decode(e.to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            warn!("{} request timed out after {}s", self.surface(), self.timeout_secs);
            GatewayError::timeout(self.timeout_secs)
        } else {
            warn!("{} request failed: {e}", self.surface());
            GatewayError::network(e)
        }
    }

    /// End the session after a 401 for `carried`.
    ///
    /// A 401 answering a token that has since been replaced is stale and
    /// changes nothing. Any other 401, including one for a request sent
    /// without a token, sends the user to the login route.
    fn invalidate(&self, carried: Option<&str>) {
        let surface = self.surface();

        if let Some(current) = self.tokens.token()
            && carried != Some(current.as_str())
        {
            debug!("Ignoring 401 for a replaced {surface} token");
            return;
        }

        let ended = self.state.end_session();
        if let Some(token) = carried {
            self.tokens.clear_if_current(token);
        }

        if !ended && carried.is_none() {
            debug!("401 for an anonymous {surface} request");
        }

        if self.events.invalidated(surface) {
            info!("{surface} session invalidated by the backend");
        }
    }
}
