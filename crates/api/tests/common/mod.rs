//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application via [`shifttally_api::router::build_app_router`]
//! so tests exercise the exact middleware stack production uses, and
//! provides thin request helpers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tower::ServiceExt;

use shifttally_api::auth::jwt::JwtConfig;
use shifttally_api::config::ServerConfig;
use shifttally_api::router::build_app_router;
use shifttally_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_defect_types: 7,
        jwt: JwtConfig {
            secret: "integration-test-secret-with-enough-entropy".to_string(),
            token_expiry_mins: 1440,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors `main.rs` via the shared router builder.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        matrix_cache: Arc::new(RwLock::new(None)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Register an admin via the API and log in, returning a Bearer token.
pub async fn admin_token(app: &Router) -> String {
    let credentials = serde_json::json!({
        "email": "admin@test.com",
        "password": "test_password_123!",
    });

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        credentials.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(app.clone(), "/api/v1/auth/login", credentials).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["data"]["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
