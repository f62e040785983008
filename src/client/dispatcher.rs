use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::client::request::RequestBody;
use crate::client::response::DispatchResult;
use crate::client::Equifax;
use crate::error::ApiError;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::{INVALID_TOKEN_MESSAGE, MAX_DISPATCH_ATTEMPTS, TOKEN_PATH};

impl Equifax {
    /// Send `method path` to the configured host and normalize the answer.
    ///
    /// Every call except `POST v2/oauth/token` carries a bearer token from the
    /// cache. A 401 whose `messages` contain `User Token Invalid` resets the
    /// token and sends the whole request again, at most
    /// `MAX_DISPATCH_ATTEMPTS` sends in total. Query values that are null (or
    /// an empty list) are left off the URL; `false`, `0` and `""` are kept.
    pub async fn fire(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        query: &[(&str, Value)],
        body: Option<RequestBody>,
    ) -> DispatchResult {
        let start = Instant::now();
        let result = self.dispatch(&method, path, headers, query, body.as_ref()).await;

        if let Some(metrics) = get_metrics().await {
            metrics.dispatch_requests.with_label_values(&[method.as_str()]).inc();
            metrics.dispatch_outcomes.with_label_values(&[result.outcome()]).inc();
            metrics.dispatch_duration.with_label_values(&[method.as_str()]).observe(start.elapsed().as_secs_f64());
        }
        result
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        headers: HeaderMap,
        query: &[(&str, Value)],
        body: Option<&RequestBody>,
    ) -> DispatchResult {
        // the token endpoint itself must go out without a bearer token
        let authenticate = !is_token_request(method, path);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut request_headers = headers.clone();

            if authenticate {
                let token = match self.authentication().check_token().await {
                    Ok(token) => token,
                    Err(error) => return DispatchResult::Unauthenticated { response: None, error },
                };
                match HeaderValue::from_str(&format!("Bearer {}", token.value())) {
                    Ok(bearer) => {
                        request_headers.insert(AUTHORIZATION, bearer);
                    }
                    Err(e) => {
                        return DispatchResult::Unauthenticated {
                            response: None,
                            error: ApiError::client(format!("access token is not a valid header value: {}", e)),
                        }
                    }
                }
            }

            debug!(attempt, method = %method, path, "dispatching");
            let (response, payload) = match self
                .transport
                .execute(method, path, request_headers, query, body)
                .await
            {
                Ok(answer) => answer,
                Err(failure) => {
                    return DispatchResult::Transport { response: failure.response, reason: failure.reason }
                }
            };

            if !is_invalid_token(response.status, &payload) {
                return DispatchResult::Completed { response, payload };
            }

            warn!(attempt, path, "upstream rejected the access token");
            if let Err(error) = self.authentication().reset_token().await {
                return DispatchResult::Unauthenticated { response: Some(response), error };
            }
            if attempt >= MAX_DISPATCH_ATTEMPTS {
                warn!(attempts = attempt, path, "giving up after repeated token rejections");
                return DispatchResult::Exhausted { response, attempts: attempt };
            }
        }
    }
}

fn is_token_request(method: &Method, path: &str) -> bool {
    *method == Method::POST && path.trim_start_matches('/') == TOKEN_PATH
}

/// 401 plus the literal marker in `messages`; other 401s are not retried.
pub(crate) fn is_invalid_token(status: StatusCode, payload: &Value) -> bool {
    status == StatusCode::UNAUTHORIZED
        && payload
            .get("messages")
            .and_then(Value::as_array)
            .is_some_and(|messages| messages.iter().any(|m| m.as_str() == Some(INVALID_TOKEN_MESSAGE)))
}
