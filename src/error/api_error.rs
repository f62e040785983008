use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error value handed back to callers of the client.
///
/// Serialized the way the upstream service shapes its own errors:
/// `{"type": "equifax" | "client", "description": .., "efxErrorCode": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ApiError {
    /// Reported by the upstream service
    #[error("equifax error{}: {}", code_suffix(.efx_error_code), .description.as_deref().unwrap_or("no description"))]
    Equifax {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(rename = "efxErrorCode", default, skip_serializing_if = "Option::is_none")]
        efx_error_code: Option<String>,
        /// Remaining fields of the upstream payload
        #[serde(flatten)]
        details: Map<String, Value>,
    },
    /// Synthesized locally: validation, construction and transport problems
    #[error("client error: {description}")]
    Client { description: String },
}

impl ApiError {
    pub fn client(description: impl Into<String>) -> Self {
        ApiError::Client { description: description.into() }
    }

    pub fn equifax(description: impl Into<String>) -> Self {
        ApiError::Equifax {
            description: Some(description.into()),
            efx_error_code: None,
            details: Map::new(),
        }
    }

    /// Wrap an already camel-cased upstream payload.
    ///
    /// `description` and `efxErrorCode` are lifted out, everything else is kept
    /// in `details`. A `type` key in the payload is dropped, the tag wins.
    pub fn from_payload(payload: &Value) -> Self {
        let mut details = match payload {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("payload".to_owned(), other.clone());
                map
            }
        };
        details.remove("type");
        let description = take_string(&mut details, "description");
        let efx_error_code = take_string(&mut details, "efxErrorCode");
        ApiError::Equifax { description, efx_error_code, details }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, ApiError::Client { .. })
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            ApiError::Equifax { description, .. } => description.as_deref(),
            ApiError::Client { description } => Some(description.as_str()),
        }
    }

    pub fn efx_error_code(&self) -> Option<&str> {
        match self {
            ApiError::Equifax { efx_error_code, .. } => efx_error_code.as_deref(),
            ApiError::Client { .. } => None,
        }
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_ref().map(|c| format!(" [{}]", c)).unwrap_or_default()
}
