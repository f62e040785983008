//! The `Equifax` client: configuration, token cache and dispatcher in one handle.

pub mod dispatcher;
pub mod request;
pub mod response;
pub mod transport;

use std::sync::Arc;

use crate::cache::token_cache::TokenCache;
use crate::config::proc_validator::validate_client_config;
use crate::config::settings::ClientConfig;
use crate::error::ApiError;
use crate::scores::ScoresAndAttributesApi;

use transport::Transport;

#[derive(Debug)]
pub struct Equifax {
    config: ClientConfig,
    transport: Arc<Transport>,
    authentication: TokenCache,
}

impl Equifax {
    /// Validate the options and build the client. Nothing goes over the wire yet.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        validate_client_config(&config).map_err(|errors| ApiError::client(errors.join("; ")))?;

        let transport = Transport::new(&config.host, config.timeout_seconds)
            .map(Arc::new)
            .map_err(|e| ApiError::client(format!("cannot build http client: {}", e)))?;
        let authentication = TokenCache::new(
            transport.clone(),
            config.client_id.clone(),
            config.client_secret.clone(),
            config.auth_scope.clone(),
        );

        Ok(Self { config, transport, authentication })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The token cache bound to this client
    pub fn authentication(&self) -> &TokenCache {
        &self.authentication
    }

    pub fn scores_attributes(&self) -> ScoresAndAttributesApi<'_> {
        ScoresAndAttributesApi::new(self)
    }
}
