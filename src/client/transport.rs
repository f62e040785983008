use std::time::Duration;

use anyhow::Result;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::request::{base_url, build_url, multipart_form, RequestBody};
use crate::client::response::ResponseMeta;
use crate::helpers::casing::camelcase_keys;
use crate::utils::constants::{CLIENT_VERSION, CLIENT_VERSION_HEADER};

/// A single attempt that never reached a JSON payload.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    pub response: Option<ResponseMeta>,
    pub reason: String,
}

impl TransportFailure {
    fn new(response: Option<ResponseMeta>, reason: impl Into<String>) -> Self {
        Self { response, reason: reason.into() }
    }
}

/// Builds and sends one request against the configured host.
///
/// Knows nothing about tokens; authentication headers arrive pre-filled.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base: Url,
}

impl Transport {
    pub fn new(host: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self { client: builder.build()?, base: base_url(host)? })
    }

    pub async fn execute(
        &self,
        method: &Method,
        path: &str,
        mut headers: HeaderMap,
        query: &[(&str, Value)],
        body: Option<&RequestBody>,
    ) -> Result<(ResponseMeta, Value), TransportFailure> {
        let url = build_url(&self.base, path, query)
            .map_err(|e| TransportFailure::new(None, format!("invalid url for '{}': {}", path, e)))?;

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(CLIENT_VERSION_HEADER),
            HeaderValue::from_static(CLIENT_VERSION),
        );
        if !body.is_some_and(RequestBody::is_encoded) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut request = self.client.request(method.clone(), url.clone()).headers(headers);
        request = match body {
            Some(RequestBody::Json(value)) => request.body(value.to_string()),
            Some(RequestBody::Form(pairs)) => request.form(pairs),
            Some(RequestBody::Multipart(parts)) => {
                let form = multipart_form(parts)
                    .map_err(|e| TransportFailure::new(None, format!("invalid multipart body: {}", e)))?;
                request.multipart(form)
            }
            None => request,
        };

        debug!(method = %method, url = %url, "sending request");
        let response = request.send().await.map_err(|e| {
            warn!(method = %method, path, error = %e, "request failed");
            TransportFailure::new(None, e.to_string())
        })?;

        let meta = ResponseMeta::new(response.status(), response.headers().clone());
        let payload: Value = response.json().await.map_err(|e| {
            warn!(status = %meta.status, path, error = %e, "response body is not json");
            TransportFailure::new(Some(meta.clone()), format!("unreadable response body: {}", e))
        })?;

        Ok((meta, camelcase_keys(payload)))
    }
}
