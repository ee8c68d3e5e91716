use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use bookstore_oauth::bookstore_oauth_config::OAuthConfig;
use bookstore_oauth::state::AppState;
use serde_json::json;
use tokio::net::TcpListener;

/// Token ids the stub backend understands.
#[allow(dead_code)]
pub mod tokens {
    pub const VALID: &str = "tok1";
    pub const UNKNOWN: &str = "missing";
    pub const GARBLED: &str = "garbled";
    pub const BROKEN_ERROR: &str = "broken-error";
    pub const SLOW: &str = "slow";
    pub const WITH_SLASH: &str = "a/b";
}

async fn access_token_handler(Path(id): Path<String>) -> Response {
    match id.as_str() {
        tokens::VALID => Json(json!({ "id": "tok1", "userId": 42, "clientId": 7 })).into_response(),
        tokens::GARBLED => (StatusCode::OK, "definitely not json").into_response(),
        tokens::BROKEN_ERROR => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
        tokens::SLOW => {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({ "id": "slow", "userId": 1, "clientId": 1 })).into_response()
        }
        tokens::WITH_SLASH => {
            Json(json!({ "id": "a/b", "userId": 5, "clientId": 6 })).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "access token not found",
                "status": 404,
                "error": "Not found"
            })),
        )
            .into_response(),
    }
}

/// Serves a stub authorization backend on an ephemeral port and returns its
/// base URL.
pub async fn spawn_backend() -> String {
    let app = Router::new().route("/oauth/access_token/{id}", get(access_token_handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}

pub fn oauth_config(base_url: &str, timeout: Duration) -> OAuthConfig {
    OAuthConfig {
        base_url: base_url.to_string(),
        timeout,
    }
}

#[allow(dead_code)]
pub async fn setup_test_state() -> AppState {
    let base_url = spawn_backend().await;
    AppState::new(&oauth_config(&base_url, Duration::from_millis(200))).unwrap()
}
