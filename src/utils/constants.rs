//! Shared constants and invariants

pub const EQUIFAX_HOST: &str = "api.equifax.com";
pub const DEFAULT_PROTOCOL: &str = "https";

pub const TOKEN_PATH: &str = "v2/oauth/token";
pub const SCORE_ATTRIBUTES_PATH: &str = "business/scores-and-attributes/v1/reports/score-attributes";

pub const CLIENT_VERSION_HEADER: &str = "x-equifax-client-ver";
pub const CORRELATION_ID_HEADER: &str = "efx-client-correlation-id";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One initial attempt plus up to two retries driven by the invalid-token signal
pub const MAX_DISPATCH_ATTEMPTS: u32 = 3;

/// Upstream marker inside `messages` of a 401 body when the bearer token was rejected
pub const INVALID_TOKEN_MESSAGE: &str = "User Token Invalid";
