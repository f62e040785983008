use serde::Deserialize;
use std::fmt;

use crate::utils::constants::EQUIFAX_HOST;

/// ================================
/// Client construction options
/// ================================
///
/// Supplied once when the client is built and never mutated afterwards.
#[derive(Deserialize, Clone)]
pub struct ClientConfig {
    /// Bare host (`api.sandbox.equifax.com`, reached over https) or a full
    /// base URL with scheme (`http://127.0.0.1:8080`)
    #[serde(default = "default_host")]
    pub host: String,
    pub client_id: String,
    pub client_secret: String,
    pub member_number: String,
    pub security_code: String,
    pub customer_code: String,
    pub auth_scope: String,
    /// Transport timeout; absent means whatever reqwest enforces
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl ClientConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        member_number: impl Into<String>,
        security_code: impl Into<String>,
        customer_code: impl Into<String>,
        auth_scope: impl Into<String>,
    ) -> Self {
        Self {
            host: default_host(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            member_number: member_number.into(),
            security_code: security_code.into(),
            customer_code: customer_code.into(),
            auth_scope: auth_scope.into(),
            timeout_seconds: None,
            logging: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }
}

// secrets stay out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("member_number", &self.member_number)
            .field("security_code", &"***")
            .field("customer_code", &self.customer_code)
            .field("auth_scope", &self.auth_scope)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("logging", &self.logging)
            .finish()
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_host() -> String {
    EQUIFAX_HOST.to_string()
}
