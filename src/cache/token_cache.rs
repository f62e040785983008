use std::sync::Arc;

use base64::Engine;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Method};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::cache::token::{AccessToken, AuthResult};
use crate::client::request::RequestBody;
use crate::client::transport::Transport;
use crate::error::ApiError;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::TOKEN_PATH;

static SUCCESS_MSG: &str = "success";
static REJECTED_MSG: &str = "rejected";
static ERROR_MSG: &str = "error";

/// Holds at most one bearer token for the client that owns it.
///
/// Minting happens while the slot is locked, so callers racing on an empty
/// cache wait for the one mint in flight instead of each minting their own.
pub struct TokenCache {
    transport: Arc<Transport>,
    client_id: String,
    client_secret: String,
    auth_scope: String,
    slot: Mutex<Option<AccessToken>>,
}

impl TokenCache {
    pub fn new(
        transport: Arc<Transport>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_scope: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_scope: auth_scope.into(),
            slot: Mutex::new(None),
        }
    }

    /// Cached token if there is one, otherwise mint and cache a fresh one.
    ///
    /// A cached token is returned as-is, it is not revalidated.
    pub async fn check_token(&self) -> AuthResult {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }
        self.mint_into(&mut slot).await
    }

    /// Drop the cached token unconditionally, then mint a fresh one.
    pub async fn reset_token(&self) -> AuthResult {
        let mut slot = self.slot.lock().await;
        *slot = None;
        if let Some(metrics) = get_metrics().await {
            metrics.token_resets.inc();
        }
        info!("access token reset");
        self.mint_into(&mut slot).await
    }

    /// Peek at the cached token without minting.
    pub async fn access_token(&self) -> Option<String> {
        self.slot.lock().await.as_ref().map(|t| t.access_token.clone())
    }

    async fn mint_into(&self, slot: &mut Option<AccessToken>) -> AuthResult {
        let token = self.get_token().await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Always a round trip to the token endpoint, never touches the cache.
    ///
    /// Client-credentials grant with HTTP Basic auth from `client_id:client_secret`.
    pub async fn get_token(&self) -> AuthResult {
        let metrics = get_metrics().await;
        let result = self.request_token().await;
        let outcome = match &result {
            Ok(_) => SUCCESS_MSG,
            Err(ApiError::Equifax { .. }) => REJECTED_MSG,
            Err(ApiError::Client { .. }) => ERROR_MSG,
        };
        if let Some(metrics) = metrics {
            metrics.token_mint_requests.with_label_values(&[outcome]).inc();
        }
        match &result {
            Ok(_) => info!("access token minted"),
            Err(e) => warn!(error = %e, "access token mint failed"),
        }
        result
    }

    async fn request_token(&self) -> AuthResult {
        let mashup = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.client_id, self.client_secret));
        let basic = HeaderValue::from_str(&format!("Basic {}", mashup))
            .map_err(|e| ApiError::client(format!("invalid basic credentials header: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, basic);
        // the body is form parameters, not json
        let body = RequestBody::form([
            ("grant_type", "client_credentials"),
            ("scope", self.auth_scope.as_str()),
        ]);

        let (response, payload) = self
            .transport
            .execute(&Method::POST, TOKEN_PATH, headers, &[], Some(&body))
            .await
            .map_err(|failure| ApiError::client(format!("token request failed: {}", failure.reason)))?;

        if response.status.as_u16() >= 400 {
            return Err(ApiError::from_payload(&payload));
        }
        serde_json::from_value::<AccessToken>(payload)
            .map_err(|e| ApiError::client(format!("token response carried no access token: {}", e)))
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache")
            .field("client_id", &self.client_id)
            .field("auth_scope", &self.auth_scope)
            .finish_non_exhaustive()
    }
}
