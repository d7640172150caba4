#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use notekeep_api::auth::jwt::{generate_access_token, TokenConfig};
use notekeep_api::config::{CorsOrigins, ServerConfig};
use notekeep_api::router::build_app_router;
use notekeep_api::state::AppState;
use notekeep_db::models::user::UserResponse;
use notekeep_db::{MemoryStore, SharedStore};

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        database_url: "memory://".to_string(),
        database_max_connections: 1,
        token: TokenConfig {
            secret: TEST_SECRET.to_string(),
            expiry_mins: 30,
        },
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The store is returned too so tests can inspect it directly.
pub fn build_test_app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    (build_test_app_with_store(Arc::new(store.clone())), store)
}

/// Build the full application router over an arbitrary store.
pub fn build_test_app_with_store(store: SharedStore) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a token for `user` signed with the test secret.
pub fn token_for(user: &UserResponse) -> String {
    generate_access_token(user, &test_config().token).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

/// POST a raw body with an optional content type and token.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Read the full response body.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Read and parse the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create an account through the API and return its access token.
pub async fn create_account(app: &Router, full_name: &str, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "fullName": full_name, "email": email, "password": password });
    let response = post_json(app, "/create-account", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"], false, "account creation failed: {json}");
    json["accessToken"].as_str().unwrap().to_string()
}

/// Add a note through the API and return the created note JSON.
pub async fn add_note(app: &Router, token: &str, title: &str, content: &str) -> serde_json::Value {
    let body = serde_json::json!({ "title": title, "content": content });
    let response = post_json_auth(app, "/add-note", token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["note"].clone()
}
