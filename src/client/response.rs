use http::{HeaderMap, StatusCode};
use serde_json::Value;

use crate::error::ApiError;

/// Transport-level facts about an upstream response.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self { status, headers }
    }
}

/// Outcome of one `fire()` call.
///
/// Only `Completed` carries a payload; every other variant says why not.
#[derive(Debug, Clone)]
pub enum DispatchResult {
    /// The upstream answered with a JSON body (any status, keys camel-cased)
    Completed { response: ResponseMeta, payload: Value },
    /// No usable token: the request was not sent, or the reset after a
    /// rejected token failed
    Unauthenticated { response: Option<ResponseMeta>, error: ApiError },
    /// Connection level failure, or a body that was not JSON
    Transport { response: Option<ResponseMeta>, reason: String },
    /// Every attempt came back with the invalid-token signal
    Exhausted { response: ResponseMeta, attempts: u32 },
}

impl DispatchResult {
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            DispatchResult::Completed { response, .. } | DispatchResult::Exhausted { response, .. } => Some(response),
            DispatchResult::Unauthenticated { response, .. } | DispatchResult::Transport { response, .. } => response.as_ref(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            DispatchResult::Completed { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, DispatchResult::Completed { .. })
    }

    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            DispatchResult::Completed { .. } => "completed",
            DispatchResult::Unauthenticated { .. } => "unauthenticated",
            DispatchResult::Transport { .. } => "transport",
            DispatchResult::Exhausted { .. } => "exhausted",
        }
    }
}
