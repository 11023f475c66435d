//! Shared helpers for handler tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
};
use catalog_shared::{JwtConfig, JwtService, config::DatabaseConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::{AppState, create_router};

pub const TEST_SECRET: &str = "test-secret-key-for-testing";

/// State over a fresh in-memory database.
pub async fn test_state() -> AppState {
    let db = catalog_db::setup(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to set up database");
    let jwt_service = JwtService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expires_in_secs: 900,
    });
    AppState::new(db, jwt_service)
}

/// Full application router over a fresh in-memory database.
pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (create_router(state.clone()), state)
}

/// A valid bearer token for an arbitrary user.
pub fn bearer(state: &AppState) -> String {
    let token = state
        .jwt_service
        .generate_access_token(Uuid::now_v7())
        .expect("should generate token");
    format!("Bearer {token}")
}

/// Builds a request with an optional auth header and JSON body.
pub fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request and returns the status and the body (`Null` when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
