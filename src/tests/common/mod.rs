// tests/common/mod.rs
pub use axum::{Json, Router};
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::routing::post;
use base64::Engine;
use http::StatusCode;
use serde_json::Value;

use crate::client::Equifax;
use crate::config::settings::ClientConfig;

pub const TEST_CLIENT_ID: &str = "abc123456def";
pub const TEST_CLIENT_SECRET: &str = "654321";
pub const TEST_AUTH_SCOPE: &str = "https://api.equifax.com/business/scores-and-attributes/v1";
pub const INVALID_TOKEN_BODY: &str = r#"{"messages":["User Token Invalid"]}"#;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn test_config(host: &str) -> ClientConfig {
    ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET, "abc123456", "XYZ", "AOK", TEST_AUTH_SCOPE)
        .with_host(host)
        .with_timeout_seconds(5)
}

pub fn test_client(host: &str) -> Equifax {
    Equifax::new(test_config(host)).expect("valid test config")
}

pub fn http_host(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

pub fn basic_auth_value() -> String {
    let mashup = base64::engine::general_purpose::STANDARD
        .encode(format!("{}:{}", TEST_CLIENT_ID, TEST_CLIENT_SECRET));
    format!("Basic {}", mashup)
}

pub fn invalid_token_body() -> Value {
    serde_json::from_str(INVALID_TOKEN_BODY).unwrap()
}

/// Token endpoint handing out `tok-1`, `tok-2`, ... and counting every mint.
pub fn rotating_token_router(counter: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/v2/oauth/token",
        post(move || {
            let c = counter.clone();
            async move {
                let n = c.fetch_add(1, Ordering::SeqCst) + 1;
                (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": format!("tok-{}", n),
                        "token_type": "Bearer",
                        "expires_in": 3600,
                        "scope": TEST_AUTH_SCOPE,
                    })),
                )
            }
        }),
    )
}
